//! Circle-drawn placement of dropped assets.
//!
//! The drop tool lets the user draw a circle on the canvas; the dropped asset is sized to the
//! largest rectangle of its own aspect ratio that fits inside that circle.

pub mod asset;
pub mod fit;
pub mod gesture;
pub mod radius;

pub use asset::{AssetKind, PendingAsset, PlacedAsset};
pub use fit::{PlacementRect, fit_rect_in_circle, try_fit_rect_in_circle};
pub use gesture::{DEFAULT_COMMIT_RADIUS, DiscardReason, DropGesture, DropOutcome, GestureState};
pub use radius::{RADIUS_PADDING, drop_radius, min_radius};
