//! Core data structures for orbitview
//!
//! This crate provides the camera pipeline that turns 3D points into pixel
//! positions: coordinate frames, the orbit camera and its capture, the
//! viewport re-anchoring step, and the vector adapters used at the UI
//! boundary.

pub mod point;
pub mod point_cloud;
pub mod traits;
pub mod frame;
pub mod viewport;
pub mod rotation;
pub mod camera;
pub mod error;

#[cfg(feature = "egui")]
pub mod egui_interop;

pub use point::*;
pub use point_cloud::*;
pub use traits::*;
pub use frame::*;
pub use viewport::*;
pub use rotation::*;
pub use camera::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Point3, Vector2, Vector3, Rotation3};
