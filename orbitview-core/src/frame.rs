//! Coordinate frames: an origin plus three axis endpoints
//!
//! A frame travels through the capture/viewport pipeline as its four ordered
//! points, `[origin, axis_x, axis_y, axis_z]`. [`CoordinateFrame::map`] keeps
//! them as an array; [`CoordinateFrame::from_ordered_points`] rebuilds a frame
//! from a slice and checks its length.

use crate::point::{Point2f, Point3f};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Number of points in the ordered representation of a frame
pub const FRAME_POINT_COUNT: usize = 4;

/// An origin and three axis endpoints.
///
/// The axis fields are points (origin + axis direction), not directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateFrame<P> {
    origin: P,
    axis_x: P,
    axis_y: P,
    axis_z: P,
}

/// A frame in model/world space
pub type CoordinateFrame3D = CoordinateFrame<Point3f>;

/// A frame after capture, in camera or pixel space
pub type CoordinateFrame2D = CoordinateFrame<Point2f>;

impl CoordinateFrame3D {
    /// The canonical frame: origin at zero, unit axis endpoints
    pub fn create() -> Self {
        Self::from_parts(
            Point3f::origin(),
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(0.0, 1.0, 0.0),
            Point3f::new(0.0, 0.0, 1.0),
        )
    }
}

impl<P: Copy> CoordinateFrame<P> {
    pub(crate) fn from_parts(origin: P, axis_x: P, axis_y: P, axis_z: P) -> Self {
        Self {
            origin,
            axis_x,
            axis_y,
            axis_z,
        }
    }

    /// Rebuild a frame from `[origin, axis_x, axis_y, axis_z]`.
    ///
    /// No orthogonality check is made: a captured frame is just four
    /// projected points.
    pub fn from_ordered_points(points: &[P]) -> Result<Self> {
        match *points {
            [origin, axis_x, axis_y, axis_z] => {
                Ok(Self::from_parts(origin, axis_x, axis_y, axis_z))
            }
            _ => Err(Error::MalformedFrame { len: points.len() }),
        }
    }

    pub fn to_ordered_points(&self) -> [P; FRAME_POINT_COUNT] {
        [self.origin, self.axis_x, self.axis_y, self.axis_z]
    }

    pub fn origin(&self) -> P {
        self.origin
    }

    pub fn axis_x(&self) -> P {
        self.axis_x
    }

    pub fn axis_y(&self) -> P {
        self.axis_y
    }

    pub fn axis_z(&self) -> P {
        self.axis_z
    }

    /// Apply `f` to each of the four points, keeping their roles.
    ///
    /// Projecting a frame this way cannot produce a malformed frame.
    pub fn map<Q: Copy>(&self, f: impl FnMut(P) -> Q) -> CoordinateFrame<Q> {
        CoordinateFrame::from(self.to_ordered_points().map(f))
    }

    /// The `(origin, endpoint)` segment of each axis, in X, Y, Z order
    pub fn axis_segments(&self) -> [(P, P); 3] {
        [
            (self.origin, self.axis_x),
            (self.origin, self.axis_y),
            (self.origin, self.axis_z),
        ]
    }
}

impl<P: Copy> From<[P; FRAME_POINT_COUNT]> for CoordinateFrame<P> {
    fn from([origin, axis_x, axis_y, axis_z]: [P; FRAME_POINT_COUNT]) -> Self {
        Self::from_parts(origin, axis_x, axis_y, axis_z)
    }
}

impl Default for CoordinateFrame3D {
    fn default() -> Self {
        Self::create()
    }
}
