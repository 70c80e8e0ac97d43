use crate::foundation::math::{clamp_to_range, non_negative};

use super::mapper::TrackMapper;

/// A cursor position together with the value it reads.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SliderSample {
    pub cursor: f64,
    pub value: f64,
}

/// Handle state for one slider: the committed cursor, the value it stands for, the handle
/// length and the current track length.
///
/// Drag previews are computed against the committed cursor and never mutate it; only
/// [`Slider::drag_end`], [`Slider::click`] and [`Slider::set_value`] move the handle.
#[derive(Clone, Debug)]
pub struct Slider<M> {
    mapper: M,
    track_size: f64,
    cap_extent: f64,
    cursor: f64,
    value: f64,
}

impl<M: TrackMapper> Slider<M> {
    /// Handle parked at cursor `0`. The handle length starts out as the mapper's cap offset.
    pub fn new(mapper: M, track_size: f64) -> Self {
        let track_size = non_negative(track_size);
        let value = mapper.track_value(0.0, track_size);
        let cap_extent = mapper.cap_offset();
        Self {
            mapper,
            track_size,
            cap_extent,
            cursor: 0.0,
            value,
        }
    }

    /// Handle placed for a stored value.
    pub fn with_value(mapper: M, track_size: f64, value: f64) -> Self {
        let mut slider = Self::new(mapper, track_size);
        slider.set_value(value);
        slider
    }

    /// Handle length along the track, used to keep track clicks inside it.
    pub fn with_cap_extent(mut self, cap_extent: f64) -> Self {
        self.cap_extent = non_negative(cap_extent);
        self
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    pub fn track_size(&self) -> f64 {
        self.track_size
    }

    pub fn cap_extent(&self) -> f64 {
        self.cap_extent
    }

    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn max_cursor(&self) -> f64 {
        self.mapper.max_cursor(self.track_size)
    }

    pub fn sample(&self) -> SliderSample {
        SliderSample {
            cursor: self.cursor,
            value: self.value,
        }
    }

    /// Live feedback while dragging `delta` pixels away from the committed cursor.
    pub fn drag_move(&self, delta: f64) -> SliderSample {
        self.sample_at(self.cursor + delta)
    }

    /// End of a drag gesture; commits the same position [`Slider::drag_move`] would report.
    pub fn drag_end(&mut self, delta: f64) -> SliderSample {
        let sample = self.drag_move(delta);
        self.commit(sample)
    }

    /// Jump the handle to a click on the bare track at `offset` pixels from its start.
    ///
    /// The handle may not start past `track_size - cap_extent`.
    pub fn click(&mut self, offset: f64) -> SliderSample {
        let limit = non_negative(self.track_size - self.cap_extent);
        let sample = self.sample_at(offset.round().min(limit));
        self.commit(sample)
    }

    /// Typed input. The value is kept as given (floored at 0); the cursor follows it.
    pub fn set_value(&mut self, value: f64) -> SliderSample {
        let value = non_negative(value);
        self.cursor = self.mapper.track_cursor(value, self.track_size);
        self.value = value;
        self.sample()
    }

    /// The track was laid out again: keep the value, move the handle.
    pub fn resize(&mut self, track_size: f64) -> SliderSample {
        self.track_size = non_negative(track_size);
        self.cursor = self.mapper.track_cursor(self.value, self.track_size);
        self.sample()
    }

    fn sample_at(&self, raw_cursor: f64) -> SliderSample {
        let cursor = clamp_to_range(raw_cursor.round(), self.max_cursor());
        SliderSample {
            cursor,
            value: self.mapper.track_value(cursor, self.track_size),
        }
    }

    fn commit(&mut self, sample: SliderSample) -> SliderSample {
        self.cursor = sample.cursor;
        self.value = sample.value;
        sample
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/slider.rs"]
mod tests;
