//! Cursor/value mapping for draggable slider handles.
//!
//! A track is a 1-D pixel span; the handle ("cap") has a footprint that must stay inside it, so
//! the usable cursor range is `[0, track_size - cap_offset]`. Two scales are provided: a uniform
//! [`LinearTrack`] and a pivot-centered [`ComplexTrack`] whose midpoint always reads `1`.

pub mod audit;
pub mod complex;
pub mod linear;
pub mod mapper;
pub mod range;
pub mod readout;
pub mod slider;

pub use audit::{MAX_SWEEP_SAMPLES, RoundTripMiss, SweepReport, audit};
pub use complex::{ComplexTrack, TrackContext};
pub use linear::LinearTrack;
pub use mapper::{TrackKind, TrackMapper, create_mapper};
pub use range::{RangeHandle, RangeSample, RangeSlider};
pub use slider::{Slider, SliderSample};
