use kurbo::Point;

use crate::foundation::math::non_negative;

/// Extra pixels around the stroke so the smallest circle is still visible.
pub const RADIUS_PADDING: f64 = 2.0;

/// Smallest circle the drop tool draws for a given stroke width.
pub fn min_radius(stroke_width: f64) -> f64 {
    non_negative(stroke_width) * 2.0 + RADIUS_PADDING
}

/// Radius of the circle anchored at `anchor` and dragged out to `pointer`, floored at
/// [`min_radius`].
pub fn drop_radius(anchor: Point, pointer: Point, stroke_width: f64) -> f64 {
    anchor.distance(pointer).max(min_radius(stroke_width))
}

#[cfg(test)]
#[path = "../../tests/unit/placement/radius.rs"]
mod tests;
