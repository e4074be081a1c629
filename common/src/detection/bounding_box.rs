use serde::{Deserialize, Serialize};

/// Axis-aligned box in image pixels, anchored at the top-left corner.
///
/// Sizes come from an untrusted backend and are never validated, so zero or
/// negative extents are carried through as-is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
