//! Core traits for orbitview
//!
//! [`VectorComponents`] is the structural adapter between vector types that
//! share component ordering (x, y[, z]), e.g. a UI toolkit's 2D position and
//! the nalgebra points used by the camera pipeline.

use crate::point::{Point2f, Point3f, Vector2f, Vector3f};

/// A vector-like type that can be taken apart into, and rebuilt from, its
/// ordered components.
pub trait VectorComponents: Sized {
    /// Ordered component storage, `[f32; 2]` or `[f32; 3]`
    type Components;

    fn to_components(&self) -> Self::Components;

    fn from_components(components: Self::Components) -> Self;
}

/// Convert between two vector representations by copying components
/// positionally.
///
/// Both types must share the same component layout; converting a 2D type
/// into a 3D one does not compile.
///
/// ```
/// use orbitview_core::{convert, Point2f, Vector2f};
///
/// let p: Point2f = convert(Vector2f::new(3.0, 4.0));
/// assert_eq!(p, Point2f::new(3.0, 4.0));
/// ```
pub fn convert<To, From>(value: From) -> To
where
    From: VectorComponents,
    To: VectorComponents<Components = From::Components>,
{
    To::from_components(value.to_components())
}

impl VectorComponents for Point2f {
    type Components = [f32; 2];

    fn to_components(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    fn from_components([x, y]: [f32; 2]) -> Self {
        Point2f::new(x, y)
    }
}

impl VectorComponents for Vector2f {
    type Components = [f32; 2];

    fn to_components(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    fn from_components([x, y]: [f32; 2]) -> Self {
        Vector2f::new(x, y)
    }
}

impl VectorComponents for Point3f {
    type Components = [f32; 3];

    fn to_components(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    fn from_components([x, y, z]: [f32; 3]) -> Self {
        Point3f::new(x, y, z)
    }
}

impl VectorComponents for Vector3f {
    type Components = [f32; 3];

    fn to_components(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    fn from_components([x, y, z]: [f32; 3]) -> Self {
        Vector3f::new(x, y, z)
    }
}

impl VectorComponents for [f32; 2] {
    type Components = [f32; 2];

    fn to_components(&self) -> [f32; 2] {
        *self
    }

    fn from_components(components: [f32; 2]) -> Self {
        components
    }
}

impl VectorComponents for [f32; 3] {
    type Components = [f32; 3];

    fn to_components(&self) -> [f32; 3] {
        *self
    }

    fn from_components(components: [f32; 3]) -> Self {
        components
    }
}
