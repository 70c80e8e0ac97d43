use crate::foundation::{
    error::SlideResult,
    math::{clamp_to_range, non_negative, require_finite_non_negative, require_finite_positive},
};

use super::mapper::TrackMapper;

/// Uniform scale: cursor `0` reads `0`, cursor `max_cursor` reads `max_value`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearTrack {
    cap_offset: f64,
    max_value: f64,
}

impl LinearTrack {
    pub fn new(cap_offset: f64, max_value: f64) -> SlideResult<Self> {
        Ok(Self {
            cap_offset: require_finite_non_negative("cap_offset", cap_offset)?,
            max_value: require_finite_positive("max_value", max_value)?,
        })
    }
}

impl TrackMapper for LinearTrack {
    fn cap_offset(&self) -> f64 {
        self.cap_offset
    }

    fn max_value(&self) -> f64 {
        self.max_value
    }

    fn track_value(&self, cursor: f64, track_size: f64) -> f64 {
        let max_cursor = self.max_cursor(track_size);
        if max_cursor == 0.0 {
            return 0.0;
        }
        let cursor = clamp_to_range(cursor, max_cursor);
        non_negative((cursor / max_cursor) * self.max_value)
    }

    fn track_cursor(&self, value: f64, track_size: f64) -> f64 {
        let max_cursor = self.max_cursor(track_size);
        let value = non_negative(value);
        clamp_to_range(((value / self.max_value) * max_cursor).round(), max_cursor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/linear.rs"]
mod tests;
