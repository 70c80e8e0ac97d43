use crate::foundation::{
    error::SlideResult,
    math::{
        clamp_to_range, largest_integer_below, non_negative, require_finite_non_negative,
        require_finite_positive,
    },
};

use super::mapper::TrackMapper;

/// Value pinned to the pivot cursor.
pub const NEUTRAL_VALUE: f64 = 1.0;

/// Floor applied to every sector width used as a divisor, so a zero-length track never divides
/// by zero.
pub const MIN_SECTOR_PIXELS: f64 = 1.0;

/// The fine sub-range right of the pivot moves this many times slower than a linear mapping of
/// the same pixels would.
pub const FINE_RANGE_COMPRESSION: f64 = 10.0;

/// Pivot-centered scale for zoom/speed style parameters.
///
/// - the pivot (`median_cursor`) always reads [`NEUTRAL_VALUE`]
/// - left of the pivot reads `[0, 1)` linearly
/// - right of the pivot starts with a compressed fine sub-range, then a coarse range that
///   reaches `max_value` at the last cursor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComplexTrack {
    cap_offset: f64,
    max_value: f64,
}

/// Per-call constants derived from `(cap_offset, max_value, track_size)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TrackContext {
    pub max_cursor: f64,
    /// Pivot cursor, `ceil(max_cursor / 2)`.
    pub median_cursor: f64,
    pub left_sector: f64,
    pub right_sector: f64,
    /// Pixel width of the fine sub-range: the largest integer `k < right_sector` with
    /// `(k / right_sector) * max_value <= 1`.
    pub right_rebase: f64,
    pub safe_rebase: f64,
    /// `((right_rebase / right_sector) * max_value) / 10`.
    pub max_rebased_scale: f64,
    /// Value span actually covered by the fine sub-range.
    ///
    /// Equals `max_rebased_scale` unless the fine ceiling `1 + max_rebased_scale` would reach
    /// or pass the first coarse value. In that case the fine slope is lowered so it would hit
    /// the first coarse value exactly one pixel later, which keeps the scale strictly
    /// increasing and invertible.
    pub fine_scale: f64,
}

impl TrackContext {
    pub fn new(cap_offset: f64, max_value: f64, track_size: f64) -> Self {
        let max_cursor = non_negative(track_size - cap_offset);
        let median_cursor = (max_cursor / 2.0).ceil();
        let left_sector = median_cursor.max(MIN_SECTOR_PIXELS);
        let right_sector = (max_cursor - median_cursor).max(MIN_SECTOR_PIXELS);

        let right_rebase = fine_range_width(right_sector, max_value);
        let safe_rebase = right_rebase.max(MIN_SECTOR_PIXELS);
        let max_rebased_scale =
            ((right_rebase / right_sector) * max_value) / FINE_RANGE_COMPRESSION;

        let next_cursor = (right_rebase + 1.0).min(right_sector);
        let coarse_start = (next_cursor / right_sector) * max_value;
        let fine_scale = if right_rebase > 0.0
            && coarse_start > NEUTRAL_VALUE
            && NEUTRAL_VALUE + max_rebased_scale >= coarse_start
        {
            (coarse_start - NEUTRAL_VALUE) * right_rebase / next_cursor
        } else {
            max_rebased_scale
        };

        Self {
            max_cursor,
            median_cursor,
            left_sector,
            right_sector,
            right_rebase,
            safe_rebase,
            max_rebased_scale,
            fine_scale,
        }
    }

    /// Highest value the fine sub-range produces.
    pub fn fine_ceiling(&self) -> f64 {
        NEUTRAL_VALUE + self.fine_scale
    }

    /// `true` when the fine slope had to be lowered to stay below the coarse range.
    pub fn seam_clamped(&self) -> bool {
        self.fine_scale < self.max_rebased_scale
    }
}

fn fine_range_width(right_sector: f64, max_value: f64) -> f64 {
    let in_fine = |k: f64| (k / right_sector) * max_value <= NEUTRAL_VALUE;
    let upper = largest_integer_below(right_sector);

    // Start from the closed form and settle on the exact boundary of `in_fine`.
    let mut k = (right_sector / max_value).floor().min(upper);
    while k > 0.0 && !in_fine(k) {
        k -= 1.0;
    }
    while k + 1.0 <= upper && in_fine(k + 1.0) {
        k += 1.0;
    }
    k
}

impl ComplexTrack {
    pub fn new(cap_offset: f64, max_value: f64) -> SlideResult<Self> {
        Ok(Self {
            cap_offset: require_finite_non_negative("cap_offset", cap_offset)?,
            max_value: require_finite_positive("max_value", max_value)?,
        })
    }

    pub fn context(&self, track_size: f64) -> TrackContext {
        TrackContext::new(self.cap_offset, self.max_value, track_size)
    }
}

impl TrackMapper for ComplexTrack {
    fn cap_offset(&self) -> f64 {
        self.cap_offset
    }

    fn max_value(&self) -> f64 {
        self.max_value
    }

    fn track_value(&self, cursor: f64, track_size: f64) -> f64 {
        let ctx = self.context(track_size);
        let cursor = clamp_to_range(cursor, ctx.max_cursor);

        if cursor == ctx.median_cursor {
            return NEUTRAL_VALUE;
        }

        let value = if cursor > ctx.median_cursor {
            let offset = cursor - ctx.median_cursor;
            let progress = offset / ctx.right_sector;
            if progress * self.max_value <= NEUTRAL_VALUE {
                NEUTRAL_VALUE + (offset / ctx.safe_rebase) * ctx.fine_scale
            } else {
                progress * self.max_value
            }
        } else {
            cursor / ctx.left_sector
        };
        non_negative(value)
    }

    fn track_cursor(&self, value: f64, track_size: f64) -> f64 {
        let ctx = self.context(track_size);
        let value = non_negative(value);

        let cursor = if value == NEUTRAL_VALUE {
            ctx.median_cursor
        } else if value > NEUTRAL_VALUE {
            if value <= ctx.fine_ceiling() && ctx.fine_scale > 0.0 {
                ((value - NEUTRAL_VALUE) / ctx.fine_scale) * ctx.right_rebase + ctx.median_cursor
            } else {
                (value / self.max_value) * ctx.right_sector + ctx.median_cursor
            }
        } else {
            value * ctx.left_sector
        };
        clamp_to_range(cursor.round(), ctx.max_cursor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/complex.rs"]
mod tests;
