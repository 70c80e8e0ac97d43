use kurbo::{Circle, Point};

use crate::foundation::math::non_negative;

use super::{
    asset::{PendingAsset, PlacedAsset},
    radius::{drop_radius, min_radius},
};

/// Circles smaller than this are treated as a stray click rather than a drop.
pub const DEFAULT_COMMIT_RADIUS: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureState {
    Idle,
    /// Anchor fixed on press; radius follows the pointer.
    Drawing { anchor: Point, radius: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum DiscardReason {
    /// Release without a preceding press.
    NotDrawing,
    BelowCommitRadius { radius: f64 },
    NoPendingAsset,
    InvalidAsset(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum DropOutcome {
    Committed { circle: Circle, placed: PlacedAsset },
    Discarded(DiscardReason),
}

/// Drop tool gesture: `Idle -> Drawing -> (Committed | discarded) -> Idle`.
#[derive(Clone, Debug)]
pub struct DropGesture {
    stroke_width: f64,
    commit_radius: f64,
    state: GestureState,
}

impl DropGesture {
    pub fn new(stroke_width: f64) -> Self {
        Self {
            stroke_width: non_negative(stroke_width),
            commit_radius: DEFAULT_COMMIT_RADIUS,
            state: GestureState::Idle,
        }
    }

    pub fn with_commit_radius(mut self, commit_radius: f64) -> Self {
        self.commit_radius = non_negative(commit_radius);
        self
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, GestureState::Drawing { .. })
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Smallest radius that commits a drop; never below [`min_radius`].
    pub fn commit_threshold(&self) -> f64 {
        self.commit_radius.max(min_radius(self.stroke_width))
    }

    /// Pointer down: fix the anchor. A second press restarts the circle.
    pub fn press(&mut self, anchor: Point) {
        self.state = GestureState::Drawing {
            anchor,
            radius: min_radius(self.stroke_width),
        };
    }

    /// Pointer move: the preview circle, or `None` while idle.
    pub fn move_to(&mut self, pointer: Point) -> Option<Circle> {
        let GestureState::Drawing { anchor, radius } = &mut self.state else {
            return None;
        };
        *radius = drop_radius(*anchor, pointer, self.stroke_width);
        Some(Circle::new(*anchor, *radius))
    }

    /// Pointer up. Always returns to [`GestureState::Idle`].
    pub fn release(&mut self, pointer: Point, pending: Option<&PendingAsset>) -> DropOutcome {
        let state = std::mem::replace(&mut self.state, GestureState::Idle);
        let GestureState::Drawing { anchor, .. } = state else {
            return DropOutcome::Discarded(DiscardReason::NotDrawing);
        };

        let radius = drop_radius(anchor, pointer, self.stroke_width);
        if radius < self.commit_threshold() {
            tracing::debug!(radius, "drop discarded: circle too small");
            return DropOutcome::Discarded(DiscardReason::BelowCommitRadius { radius });
        }
        let Some(asset) = pending else {
            tracing::debug!(radius, "drop discarded: no pending asset");
            return DropOutcome::Discarded(DiscardReason::NoPendingAsset);
        };

        let circle = Circle::new(anchor, radius);
        match asset.place(circle) {
            Ok(placed) => {
                tracing::debug!(
                    media_path = %placed.media_path,
                    left = placed.left,
                    top = placed.top,
                    width = placed.width,
                    height = placed.height,
                    "drop committed"
                );
                DropOutcome::Committed { circle, placed }
            }
            Err(e) => {
                tracing::debug!(error = %e, "drop discarded: invalid asset");
                DropOutcome::Discarded(DiscardReason::InvalidAsset(e.to_string()))
            }
        }
    }

    /// Pointer left the canvas mid-gesture; handled exactly like a release.
    pub fn leave(&mut self, pointer: Point, pending: Option<&PendingAsset>) -> DropOutcome {
        self.release(pointer, pending)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/gesture.rs"]
mod tests;
