use kurbo::{Point, Rect, Size};

use crate::foundation::error::{SlideError, SlideResult};

/// Axis-aligned placement of a dropped asset, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacementRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlacementRect {
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn diagonal(self) -> f64 {
        self.width.hypot(self.height)
    }

    pub fn to_rect(self) -> Rect {
        Rect::from_origin_size((self.x, self.y), (self.width, self.height))
    }
}

impl From<PlacementRect> for Rect {
    fn from(r: PlacementRect) -> Self {
        r.to_rect()
    }
}

/// Largest rectangle with the aspect ratio of `asset` inscribed in the circle at `center`.
///
/// The diagonal equals the diameter: `w² + h² = (2r)²` with `w / h` fixed.
///
/// `asset.height` must be positive; use [`try_fit_rect_in_circle`] for unchecked input.
pub fn fit_rect_in_circle(asset: Size, center: Point, radius: f64) -> PlacementRect {
    debug_assert!(asset.height > 0.0, "asset height must be > 0");

    let aspect_ratio = asset.width / asset.height;
    let diameter = radius * 2.0;

    let height = diameter / (aspect_ratio.powi(2) + 1.0).sqrt();
    let width = height * aspect_ratio;

    PlacementRect {
        x: center.x - width / 2.0,
        y: center.y - height / 2.0,
        width,
        height,
    }
}

/// [`fit_rect_in_circle`] with the asset and circle validated first.
pub fn try_fit_rect_in_circle(
    asset: Size,
    center: Point,
    radius: f64,
) -> SlideResult<PlacementRect> {
    if !(asset.width.is_finite() && asset.width > 0.0) {
        return Err(SlideError::validation(format!(
            "asset width must be finite and > 0 (got {})",
            asset.width
        )));
    }
    if !(asset.height.is_finite() && asset.height > 0.0) {
        return Err(SlideError::validation(format!(
            "asset height must be finite and > 0 (got {})",
            asset.height
        )));
    }
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(SlideError::validation(format!(
            "placement radius must be finite and >= 0 (got {radius})"
        )));
    }
    if !(center.x.is_finite() && center.y.is_finite()) {
        return Err(SlideError::validation("placement center must be finite"));
    }
    Ok(fit_rect_in_circle(asset, center, radius))
}

#[cfg(test)]
#[path = "../../tests/unit/placement/fit.rs"]
mod tests;
