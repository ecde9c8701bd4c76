//! Orbit camera with an orthographic, depth-discarding capture

use crate::frame::CoordinateFrame3D;
use crate::point::{Point2f, Point3f, Vector2f, Vector3f};
use crate::rotation::OrbitAngles;
use nalgebra::Rotation3;
use serde::{Deserialize, Serialize};

/// Scale and offset applied to camera-relative coordinates during capture.
///
/// The identity view leaves `((p - position) . right, (p - position) . up)`
/// untouched. Pixel views carry a negative y scale so that camera "up" points
/// up on a y-down screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: Vector2f,
    pub offset: Vector2f,
}

impl ViewTransform {
    pub fn identity() -> Self {
        Self {
            scale: Vector2f::new(1.0, 1.0),
            offset: Vector2f::zeros(),
        }
    }

    /// A view of `pixels_per_unit` with y flipped for screen space, with the
    /// camera's optical axis landing at `offset`.
    pub fn pixels(pixels_per_unit: f32, offset: Vector2f) -> Self {
        Self {
            scale: Vector2f::new(pixels_per_unit, -pixels_per_unit),
            offset,
        }
    }

    pub fn apply(&self, camera_relative: Vector2f) -> Point2f {
        Point2f::from(self.offset + self.scale.component_mul(&camera_relative))
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Placement of the interactive camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Distance from the world origin along +Z
    pub standoff: f32,
    pub pixels_per_unit: f32,
    /// Pixel position of the optical axis inside the viewport
    pub view_offset: [f32; 2],
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            standoff: 5.0,
            pixels_per_unit: 250.0,
            view_offset: [300.0, 300.0],
        }
    }
}

/// Placement of the passive world camera that watches the interactive one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldCameraSettings {
    pub standoff: f32,
    /// Turn about world +Y, in degrees
    pub yaw_degrees: f32,
    /// Turn about world +X, in degrees; negative looks down from above
    pub pitch_degrees: f32,
    pub pixels_per_unit: f32,
    pub view_offset: [f32; 2],
}

impl Default for WorldCameraSettings {
    fn default() -> Self {
        Self {
            standoff: 20.0,
            yaw_degrees: 35.0,
            pitch_degrees: -25.0,
            pixels_per_unit: 30.0,
            view_offset: [300.0, 300.0],
        }
    }
}

/// A camera with an orthonormal right/up/forward basis.
///
/// The basis only changes through [`Camera::rotate`], which turns position,
/// right and up together.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Point3f,
    right: Vector3f,
    up: Vector3f,
    view: ViewTransform,
}

impl Camera {
    /// Create a camera from a position and a (not necessarily exact) basis.
    ///
    /// `right` is normalized and `up` is made orthogonal to it, so callers
    /// may pass slightly skewed vectors.
    pub fn new(position: Point3f, right: Vector3f, up: Vector3f, view: ViewTransform) -> Self {
        let (right, up) = orthonormalize(right, up);
        Self {
            position,
            right,
            up,
            view,
        }
    }

    /// The interactive camera in its start pose
    pub fn create_default() -> Self {
        Self::from_settings(&CameraSettings::default())
    }

    /// The world camera in its fixed pose
    pub fn create_world() -> Self {
        Self::world_from_settings(&WorldCameraSettings::default())
    }

    /// Axis-aligned camera on +Z looking back at the origin
    pub fn from_settings(settings: &CameraSettings) -> Self {
        let [x, y] = settings.view_offset;
        Self::new(
            Point3f::new(0.0, 0.0, settings.standoff),
            Vector3f::x(),
            Vector3f::y(),
            ViewTransform::pixels(settings.pixels_per_unit, Vector2f::new(x, y)),
        )
    }

    pub fn world_from_settings(settings: &WorldCameraSettings) -> Self {
        let [x, y] = settings.view_offset;
        let mut camera = Self::new(
            Point3f::new(0.0, 0.0, settings.standoff),
            Vector3f::x(),
            Vector3f::y(),
            ViewTransform::pixels(settings.pixels_per_unit, Vector2f::new(x, y)),
        );
        let yaw =
            Rotation3::from_axis_angle(&Vector3f::y_axis(), settings.yaw_degrees.to_radians());
        let pitch =
            Rotation3::from_axis_angle(&Vector3f::x_axis(), settings.pitch_degrees.to_radians());
        camera.rotate(&(yaw * pitch));
        camera
    }

    /// Turn position, right and up by `rotation` in a single update.
    ///
    /// The basis is re-orthonormalized afterwards so rounding error does not
    /// accumulate over many frames.
    pub fn rotate(&mut self, rotation: &Rotation3<f32>) {
        let (right, up) = orthonormalize(rotation * self.right, rotation * self.up);
        self.position = rotation * self.position;
        self.right = right;
        self.up = up;
    }

    /// Orbit about the current up and right axes.
    ///
    /// Both axes are read before the update; see [`OrbitAngles::compose`].
    pub fn orbit(&mut self, angles: OrbitAngles) {
        if angles.is_zero() {
            return;
        }
        let rotation = angles.compose(&self.up, &self.right);
        self.rotate(&rotation);
        log::debug!(
            "Orbit by ({:.4}, {:.4}) rad, camera now at {:?}",
            angles.angle_x,
            angles.angle_y,
            self.position
        );
    }

    /// Project a point onto the camera plane, dropping the forward component.
    ///
    /// There is no clipping: points behind the camera land on the plane like
    /// any other point.
    pub fn capture_point(&self, point: &Point3f) -> Point2f {
        let relative = *point - self.position;
        self.view
            .apply(Vector2f::new(relative.dot(&self.right), relative.dot(&self.up)))
    }

    /// Project points onto the camera plane, preserving order
    pub fn capture(&self, points: &[Point3f]) -> Vec<Point2f> {
        points.iter().map(|p| self.capture_point(p)).collect()
    }

    /// The camera's own basis as a frame rooted at its position
    pub fn coordinate_system(&self) -> CoordinateFrame3D {
        CoordinateFrame3D::from_parts(
            self.position,
            self.position + self.right,
            self.position + self.up,
            self.position + self.forward_vector(),
        )
    }

    pub fn position(&self) -> Point3f {
        self.position
    }

    pub fn up_vector(&self) -> Vector3f {
        self.up
    }

    pub fn right_vector(&self) -> Vector3f {
        self.right
    }

    /// Viewing direction, `up x right`
    pub fn forward_vector(&self) -> Vector3f {
        self.up.cross(&self.right)
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::create_default()
    }
}

/// Gram-Schmidt on the (right, up) pair
fn orthonormalize(right: Vector3f, up: Vector3f) -> (Vector3f, Vector3f) {
    let right = right.normalize();
    let up = (up - right * right.dot(&up)).normalize();
    (right, up)
}
