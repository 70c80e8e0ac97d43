//! Text-box side of a slider: how values are shown and how typed input is accepted.

/// Values at or above `1` show two decimals, fractions below `1` show three.
pub fn format_value(value: f64) -> String {
    if value >= 1.0 {
        format!("{value:.2}")
    } else {
        format!("{value:.3}")
    }
}

/// Parse the leading decimal number in `text`, ignoring trailing garbage.
///
/// Input with no leading number reads as `0`.
pub fn parse_leading_float(text: &str) -> f64 {
    let text = text.trim_start();
    let candidate_len = text
        .char_indices()
        .take_while(|(_, ch)| ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.' | 'e' | 'E'))
        .map(|(i, ch)| i + ch.len_utf8())
        .last()
        .unwrap_or(0);

    (1..=candidate_len)
        .rev()
        .find_map(|len| text[..len].parse::<f64>().ok())
        .filter(|v| v.is_finite())
        // Folds `-0.0` into `0.0`.
        .map(|v| v + 0.0)
        .unwrap_or(0.0)
}

/// Accept typed input only when it lands inside `[0, max_value]`.
pub fn parse_value_input(text: &str, max_value: f64) -> Option<f64> {
    let value = parse_leading_float(text);
    if value < 0.0 || value > max_value {
        return None;
    }
    Some(value)
}

/// Stored timeline position to the "percent remaining" shown next to the time slider.
///
/// A non-positive `max_time` has no meaningful percentage and reads as `0`.
pub fn to_client_time(server_time: f64, max_time: f64) -> f64 {
    if max_time <= 0.0 {
        return 0.0;
    }
    (1.0 - (server_time / max_time)) * 100.0
}

/// Inverse of [`to_client_time`].
pub fn to_server_time(client_time: f64, max_time: f64) -> f64 {
    if max_time <= 0.0 {
        return 0.0;
    }
    max_time - ((client_time / 100.0) * max_time)
}

#[cfg(test)]
#[path = "../../tests/unit/track/readout.rs"]
mod tests;
