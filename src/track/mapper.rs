use crate::foundation::{error::SlideResult, math::non_negative};

use super::{complex::ComplexTrack, linear::LinearTrack};

/// Bidirectional cursor <-> value conversion over a bounded track.
///
/// Implementations are pure: every call derives what it needs from `(cap_offset, max_value)`
/// and the `track_size` passed in. Out-of-range input is clamped, never rejected.
pub trait TrackMapper: std::fmt::Debug + Send + Sync {
    /// Pixel footprint of the handle.
    fn cap_offset(&self) -> f64;

    /// Value ceiling reached at the rightmost cursor.
    fn max_value(&self) -> f64;

    /// Usable cursor range `max(0, track_size - cap_offset)`.
    fn max_cursor(&self, track_size: f64) -> f64 {
        non_negative(track_size - self.cap_offset())
    }

    /// Map a cursor position to the value it represents.
    fn track_value(&self, cursor: f64, track_size: f64) -> f64;

    /// Map a value to a rounded cursor position in `[0, max_cursor]`.
    fn track_cursor(&self, value: f64, track_size: f64) -> f64;
}

impl<T: TrackMapper + ?Sized> TrackMapper for Box<T> {
    fn cap_offset(&self) -> f64 {
        (**self).cap_offset()
    }

    fn max_value(&self) -> f64 {
        (**self).max_value()
    }

    fn max_cursor(&self, track_size: f64) -> f64 {
        (**self).max_cursor(track_size)
    }

    fn track_value(&self, cursor: f64, track_size: f64) -> f64 {
        (**self).track_value(cursor, track_size)
    }

    fn track_cursor(&self, value: f64, track_size: f64) -> f64 {
        (**self).track_cursor(value, track_size)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    Linear,
    Complex,
}

pub fn create_mapper(
    kind: TrackKind,
    cap_offset: f64,
    max_value: f64,
) -> SlideResult<Box<dyn TrackMapper>> {
    match kind {
        TrackKind::Linear => Ok(Box::new(LinearTrack::new(cap_offset, max_value)?)),
        TrackKind::Complex => Ok(Box::new(ComplexTrack::new(cap_offset, max_value)?)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/mapper.rs"]
mod tests;
