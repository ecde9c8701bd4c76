//! Viewport placement of camera-space coordinates

use crate::point::{Point2f, Vector2f};
use serde::{Deserialize, Serialize};

/// A pixel-space rectangle that camera-space coordinates are anchored into.
///
/// Camera-space coordinates are already in pixel units (the camera's view
/// transform does the scaling), so the mapping is a pure translation by the
/// rectangle's origin. Rebuilt every frame from the current window rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    origin: Point2f,
    size: Vector2f,
}

impl ViewportTransform {
    /// Store the rectangle as given; zero or negative sizes are accepted.
    pub fn create(origin: Point2f, size: Vector2f) -> Self {
        Self { origin, size }
    }

    pub fn origin(&self) -> Point2f {
        self.origin
    }

    pub fn size(&self) -> Vector2f {
        self.size
    }

    /// Whether both width and height are positive.
    ///
    /// Pointer motion can only be turned into orbit angles over a viewport
    /// with area.
    pub fn has_area(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    /// Anchor a single camera-space point in the viewport
    pub fn transform_point(&self, point: &Point2f) -> Point2f {
        *point + self.origin.coords
    }

    /// Anchor camera-space points in the viewport, preserving order
    pub fn transform(&self, points: &[Point2f]) -> Vec<Point2f> {
        points.iter().map(|p| self.transform_point(p)).collect()
    }

    /// Whether a pixel point lies inside the rectangle, ignoring the top
    /// `top_inset` pixels (a window title bar).
    pub fn contains(&self, point: &Point2f, top_inset: f32) -> bool {
        let min = Point2f::new(self.origin.x, self.origin.y + top_inset);
        let max = self.origin + self.size;
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}
