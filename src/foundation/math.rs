/// Clamp `v` to `>= 0`. NaN collapses to `0`.
pub(crate) fn non_negative(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.max(0.0) }
}

/// Clamp `v` into `[0, hi]`. NaN collapses to `0`.
pub(crate) fn clamp_to_range(v: f64, hi: f64) -> f64 {
    non_negative(v).min(hi.max(0.0))
}

/// Largest integer strictly below `x` (for `x > 0`).
pub(crate) fn largest_integer_below(x: f64) -> f64 {
    (x.ceil() - 1.0).max(0.0)
}

pub(crate) fn require_finite_non_negative(name: &str, v: f64) -> crate::SlideResult<f64> {
    if !v.is_finite() || v < 0.0 {
        return Err(crate::SlideError::validation(format!(
            "{name} must be finite and >= 0 (got {v})"
        )));
    }
    Ok(v)
}

pub(crate) fn require_finite_positive(name: &str, v: f64) -> crate::SlideResult<f64> {
    if !v.is_finite() || v <= 0.0 {
        return Err(crate::SlideError::validation(format!(
            "{name} must be finite and > 0 (got {v})"
        )));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
