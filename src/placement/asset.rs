use kurbo::{Circle, Size};

use crate::foundation::error::SlideResult;

use super::fit::{PlacementRect, try_fit_rect_in_circle};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssetKind {
    Svg {
        viewbox: String,
        fill: String,
        stroke: String,
        stroke_width: f64,
    },
    Img,
}

/// Asset selected in the drop tool, waiting for a circle to be drawn.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PendingAsset {
    pub media_path: String,
    /// Intrinsic width in pixels.
    pub width: f64,
    /// Intrinsic height in pixels.
    pub height: f64,
    #[serde(flatten)]
    pub kind: AssetKind,
}

impl PendingAsset {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Size and position this asset inside `circle`.
    pub fn place(&self, circle: Circle) -> SlideResult<PlacedAsset> {
        let frame = try_fit_rect_in_circle(self.size(), circle.center, circle.radius)?;
        Ok(PlacedAsset {
            media_path: self.media_path.clone(),
            left: frame.x,
            top: frame.y,
            width: frame.width,
            height: frame.height,
            kind: self.kind.clone(),
            pending: false,
        })
    }
}

/// Asset record handed to project storage once a drop is committed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacedAsset {
    pub media_path: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(flatten)]
    pub kind: AssetKind,
    pub pending: bool,
}

impl PlacedAsset {
    pub fn frame(&self) -> PlacementRect {
        PlacementRect {
            x: self.left,
            y: self.top,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/asset.rs"]
mod tests;
