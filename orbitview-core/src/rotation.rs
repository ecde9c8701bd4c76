//! Orbit rotation: pointer motion to angles, angles to a basis rotation

use crate::point::{Vector2f, Vector3f};
use nalgebra::{Rotation3, Unit};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Angles of one orbit step, in radians.
///
/// `angle_x` turns about the camera's up axis, `angle_y` about its right axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OrbitAngles {
    pub angle_x: f32,
    pub angle_y: f32,
}

impl OrbitAngles {
    pub fn new(angle_x: f32, angle_y: f32) -> Self {
        Self { angle_x, angle_y }
    }

    /// Derive angles from pointer motion in pixels.
    ///
    /// Moving across the whole viewport width (height) sweeps one full turn
    /// about the up (right) axis. `viewport_size` must be positive in both
    /// components; the windowing layer guarantees this and it is not checked
    /// here.
    pub fn from_motion(motion: Vector2f, viewport_size: Vector2f) -> Self {
        Self {
            angle_x: motion.x * (TAU / viewport_size.x),
            angle_y: motion.y * (TAU / viewport_size.y),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.angle_x == 0.0 && self.angle_y == 0.0
    }

    /// Compose `R_up(angle_x) * R_right(angle_y)`.
    ///
    /// Both axes are taken from the same basis, so the result does not depend
    /// on which single-axis rotation is thought of as applied first.
    pub fn compose(&self, up: &Vector3f, right: &Vector3f) -> Rotation3<f32> {
        let about_up = Rotation3::from_axis_angle(&Unit::new_normalize(*up), self.angle_x);
        let about_right = Rotation3::from_axis_angle(&Unit::new_normalize(*right), self.angle_y);
        about_up * about_right
    }
}
