//! Slider and drop-tool settings, loadable from JSON.
//!
//! Missing sections fall back to the editor's built-in controls.

use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{SlideError, SlideResult},
    placement::{DEFAULT_COMMIT_RADIUS, DropGesture},
    track::{RangeSlider, Slider, TrackKind, TrackMapper, create_mapper},
};

/// Timeline length used by the time slider when none is configured.
pub const DEFAULT_TIMELINE_MAX: f64 = 60.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlsConfig {
    #[serde(default = "SliderConfig::scale_preset")]
    pub scale: SliderConfig,
    #[serde(default = "SliderConfig::default_time_preset")]
    pub time: SliderConfig,
    /// Effect start/end pair; both handles share this track.
    #[serde(default = "SliderConfig::default_effect_preset")]
    pub effect: SliderConfig,
    #[serde(default)]
    pub drop: DropConfig,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            scale: SliderConfig::scale_preset(),
            time: SliderConfig::default_time_preset(),
            effect: SliderConfig::default_effect_preset(),
            drop: DropConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderId {
    Scale,
    Time,
    Effect,
}

impl ControlsConfig {
    pub fn from_json_str(s: &str) -> SlideResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[tracing::instrument]
    pub fn load(path: &Path) -> SlideResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read controls config '{}'", path.display()))?;
        let cfg = Self::from_json_str(&text)?;
        tracing::debug!(
            scale_max = cfg.scale.max_value,
            time_max = cfg.time.max_value,
            "controls config loaded"
        );
        Ok(cfg)
    }

    pub fn validate(&self) -> SlideResult<()> {
        self.scale.validate("scale")?;
        self.time.validate("time")?;
        self.effect.validate("effect")?;
        self.drop.validate()
    }

    pub fn slider(&self, id: SliderId) -> &SliderConfig {
        match id {
            SliderId::Scale => &self.scale,
            SliderId::Time => &self.time,
            SliderId::Effect => &self.effect,
        }
    }
}

/// One slider: the handle footprint, the track it runs on and the scale it reads.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SliderConfig {
    pub kind: TrackKind,
    /// Handle length along the track, in pixels.
    pub cap_extent: f64,
    /// Border pixels the handle may overlap; subtracted from `cap_extent`.
    #[serde(default)]
    pub border: f64,
    /// Laid-out track length, in pixels.
    pub track_length: f64,
    pub max_value: f64,
}

impl SliderConfig {
    /// Horizontal zoom slider: 51px cap, 430px track, up to 30x.
    pub fn scale_preset() -> Self {
        Self {
            kind: TrackKind::Complex,
            cap_extent: 51.0,
            border: 2.0,
            track_length: 430.0,
            max_value: 30.0,
        }
    }

    /// Vertical time slider: 21px cap on a 200px track spanning `[0, max_time]`.
    pub fn time_preset(max_time: f64) -> Self {
        Self {
            kind: TrackKind::Linear,
            cap_extent: 21.0,
            border: 2.0,
            track_length: 200.0,
            max_value: max_time,
        }
    }

    fn default_time_preset() -> Self {
        Self::time_preset(DEFAULT_TIMELINE_MAX)
    }

    /// Effect timeline: 17px start/end caps; cursors stop 15px (the row's side padding) short of
    /// the track end. Spans `[0, max_time]`.
    pub fn effect_preset(max_time: f64) -> Self {
        Self {
            kind: TrackKind::Linear,
            cap_extent: 17.0,
            border: 2.0,
            track_length: 300.0,
            max_value: max_time,
        }
    }

    fn default_effect_preset() -> Self {
        Self::effect_preset(DEFAULT_TIMELINE_MAX)
    }

    pub fn cap_offset(&self) -> f64 {
        self.cap_extent - self.border
    }

    pub fn validate(&self, name: &str) -> SlideResult<()> {
        if !(self.cap_extent.is_finite() && self.border.is_finite()) {
            return Err(SlideError::config(format!(
                "{name}: cap_extent and border must be finite"
            )));
        }
        if self.cap_offset() < 0.0 {
            return Err(SlideError::config(format!(
                "{name}: border ({}) must not exceed cap_extent ({})",
                self.border, self.cap_extent
            )));
        }
        if !(self.track_length.is_finite() && self.track_length >= 0.0) {
            return Err(SlideError::config(format!(
                "{name}: track_length must be finite and >= 0"
            )));
        }
        if !(self.max_value.is_finite() && self.max_value > 0.0) {
            return Err(SlideError::config(format!(
                "{name}: max_value must be finite and > 0"
            )));
        }
        Ok(())
    }

    pub fn build(&self) -> SlideResult<Box<dyn TrackMapper>> {
        create_mapper(self.kind, self.cap_offset(), self.max_value)
    }

    /// Slider on the configured track with its handle placed for `value`.
    pub fn slider(&self, value: f64) -> SlideResult<Slider<Box<dyn TrackMapper>>> {
        let slider = Slider::with_value(self.build()?, self.track_length, value);
        Ok(slider.with_cap_extent(self.cap_extent))
    }

    /// Start/end pair on the configured track, placed for stored offset and duration times.
    pub fn range_slider(
        &self,
        offset: f64,
        duration: f64,
    ) -> SlideResult<RangeSlider<Box<dyn TrackMapper>>> {
        Ok(RangeSlider::new(
            self.slider(0.0)?,
            self.slider(0.0)?,
            offset,
            duration,
        ))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DropConfig {
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_commit_radius")]
    pub commit_radius: f64,
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_commit_radius() -> f64 {
    DEFAULT_COMMIT_RADIUS
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            stroke_width: default_stroke_width(),
            commit_radius: default_commit_radius(),
        }
    }
}

impl DropConfig {
    pub fn validate(&self) -> SlideResult<()> {
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(SlideError::config("drop: stroke_width must be finite and >= 0"));
        }
        if !(self.commit_radius.is_finite() && self.commit_radius >= 0.0) {
            return Err(SlideError::config("drop: commit_radius must be finite and >= 0"));
        }
        Ok(())
    }

    pub fn gesture(&self) -> DropGesture {
        DropGesture::new(self.stroke_width).with_commit_radius(self.commit_radius)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
