use crate::foundation::math::clamp_to_range;

use super::{
    mapper::TrackMapper,
    slider::{Slider, SliderSample},
};

/// Which of the two handles of a [`RangeSlider`] an input targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeHandle {
    /// Start of the range.
    Offset,
    /// End of the range.
    Duration,
}

/// Both handles after an update.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RangeSample {
    pub offset: SliderSample,
    pub duration: SliderSample,
}

/// Start/end handle pair sharing one timeline track.
///
/// `offset <= duration` holds after every operation: moving one handle past the other drags
/// the other handle along to the same value. The mapper is expected to be monotonic, so the
/// cursors keep the same order as the values.
#[derive(Clone, Debug)]
pub struct RangeSlider<M> {
    offset: Slider<M>,
    duration: Slider<M>,
}

impl<M: TrackMapper> RangeSlider<M> {
    /// Place both handles for stored times. Each is clamped into `[0, max_value]`; a duration
    /// below the offset is raised to it.
    ///
    /// `offset` and `duration` are the two handle sliders; the duration slider is resized to
    /// the offset slider's track.
    pub fn new(
        mut offset: Slider<M>,
        mut duration: Slider<M>,
        offset_value: f64,
        duration_value: f64,
    ) -> Self {
        let max_value = offset.mapper().max_value();
        duration.resize(offset.track_size());
        offset.set_value(clamp_to_range(offset_value, max_value));
        duration.set_value(clamp_to_range(duration_value, max_value));

        let mut range = Self { offset, duration };
        range.push_duration();
        range
    }

    pub fn offset(&self) -> &Slider<M> {
        &self.offset
    }

    pub fn duration(&self) -> &Slider<M> {
        &self.duration
    }

    pub fn max_value(&self) -> f64 {
        self.offset.mapper().max_value()
    }

    pub fn track_size(&self) -> f64 {
        self.offset.track_size()
    }

    pub fn sample(&self) -> RangeSample {
        RangeSample {
            offset: self.offset.sample(),
            duration: self.duration.sample(),
        }
    }

    /// Live readout of one handle while it is dragged. The other handle is only pushed on
    /// [`RangeSlider::drag_end`].
    pub fn drag_move(&self, handle: RangeHandle, delta: f64) -> SliderSample {
        self.handle(handle).drag_move(delta)
    }

    pub fn drag_end(&mut self, handle: RangeHandle, delta: f64) -> RangeSample {
        self.handle_mut(handle).drag_end(delta);
        self.settle(handle)
    }

    pub fn click(&mut self, handle: RangeHandle, offset: f64) -> RangeSample {
        self.handle_mut(handle).click(offset);
        self.settle(handle)
    }

    /// Typed input for one handle. Values above the timeline maximum are ignored and leave
    /// both handles where they were.
    pub fn set_value(&mut self, handle: RangeHandle, value: f64) -> Option<RangeSample> {
        if value > self.max_value() {
            return None;
        }
        self.handle_mut(handle).set_value(value);
        Some(self.settle(handle))
    }

    /// The shared track was laid out again.
    pub fn resize(&mut self, track_size: f64) -> RangeSample {
        self.offset.resize(track_size);
        self.duration.resize(track_size);
        self.sample()
    }

    fn handle(&self, handle: RangeHandle) -> &Slider<M> {
        match handle {
            RangeHandle::Offset => &self.offset,
            RangeHandle::Duration => &self.duration,
        }
    }

    fn handle_mut(&mut self, handle: RangeHandle) -> &mut Slider<M> {
        match handle {
            RangeHandle::Offset => &mut self.offset,
            RangeHandle::Duration => &mut self.duration,
        }
    }

    /// Restore `offset <= duration` by moving the handle that was not touched.
    fn settle(&mut self, moved: RangeHandle) -> RangeSample {
        match moved {
            RangeHandle::Offset => self.push_duration(),
            RangeHandle::Duration => self.push_offset(),
        }
        self.sample()
    }

    fn push_duration(&mut self) {
        if self.duration.value() < self.offset.value() {
            tracing::debug!(to = self.offset.value(), "duration pushed by offset");
            self.duration.set_value(self.offset.value());
        }
    }

    fn push_offset(&mut self) {
        if self.offset.value() > self.duration.value() {
            tracing::debug!(to = self.duration.value(), "offset pushed by duration");
            self.offset.set_value(self.duration.value());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/range.rs"]
mod tests;
