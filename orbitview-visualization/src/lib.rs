//! Visualization for orbitview
//!
//! This crate turns the core camera pipeline into two views:
//! - the orbit view, rotated by pointer drags, automatic rotation and step
//!   buttons, drawing the origin frame and the model
//! - the world view, a fixed camera drawing the orbit camera's pose
//!
//! Drawing goes through [`DrawSurface`]; the `viewer` feature provides an
//! egui implementation and a native window.

pub mod draw;
pub mod input;
pub mod options;
pub mod view;

#[cfg(feature = "viewer")]
pub mod interactive_viewer;

pub use draw::*;
pub use input::*;
pub use options::*;
pub use view::*;

#[cfg(feature = "viewer")]
pub use interactive_viewer::{EguiSurface, OrbitViewerApp};

use orbitview_core::{PointCloud, Point3f};

/// Show a point cloud in the interactive viewer
#[cfg(feature = "viewer")]
pub fn show_point_cloud(
    cloud: PointCloud<Point3f>,
    options: &ViewerOptions,
) -> orbitview_core::Result<()> {
    OrbitViewerApp::new(cloud, options).run()
}

/// Run both views for `frames` idle frames against a recording surface.
///
/// Useful without a display: the returned surface holds everything the last
/// frame drew, orbit view first.
pub fn render_headless(
    cloud: &PointCloud<Point3f>,
    options: &ViewerOptions,
    input: &FrameInput,
    frames: usize,
    auto_rotate: bool,
) -> RecordingSurface {
    let mut orbit = OrbitView::new(options);
    let world = WorldView::new(options);
    orbit.controls.auto_rotate_x = auto_rotate;
    orbit.controls.auto_rotate_y = auto_rotate;

    let mut surface = RecordingSurface::new();
    for _ in 0..frames.max(1) {
        surface.clear();
        orbit.frame(input, cloud.as_slice(), &mut surface);
        world.frame(input, orbit.camera(), &mut surface);
    }
    log::debug!(
        "Rendered {} headless frames, camera at {:?}",
        frames.max(1),
        orbit.camera().position()
    );
    surface
}
