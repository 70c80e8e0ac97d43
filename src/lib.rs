//! Pointer-to-value mapping and placement geometry for canvas editor controls.
//!
//! - [`track`]: cursor <-> value conversion for slider handles, on a uniform
//!   ([`LinearTrack`]) or pivot-centered ([`ComplexTrack`]) scale
//! - [`placement`]: turning a drawn circle into an aspect-preserving asset rectangle
//! - [`config`]: JSON-loadable slider and drop-tool settings
//!
//! Every mapping function is pure and clamps out-of-range input instead of failing; only
//! construction and configuration return [`SlideResult`].
#![forbid(unsafe_code)]

mod foundation;

pub mod config;
pub mod placement;
pub mod track;

pub use kurbo::{Circle, Point, Rect, Size};

pub use crate::config::{ControlsConfig, DropConfig, SliderConfig, SliderId};
pub use crate::foundation::error::{SlideError, SlideResult};
pub use crate::placement::{
    DropGesture, DropOutcome, PendingAsset, PlacedAsset, PlacementRect, drop_radius,
    fit_rect_in_circle, min_radius,
};
pub use crate::track::{
    ComplexTrack, LinearTrack, RangeHandle, RangeSlider, Slider, SliderSample, TrackContext,
    TrackKind, TrackMapper,
};
