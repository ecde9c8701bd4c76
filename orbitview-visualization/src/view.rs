//! The two views: the interactive orbit view and the world view watching it

use crate::draw::{
    draw_coordinate_frame, draw_line_between_points, draw_point_cloud, DrawStyle, DrawSurface,
};
use crate::input::{DragTracker, FrameInput, RotationControls};
use crate::options::ViewerOptions;
use orbitview_core::{
    Camera, CameraSettings, CoordinateFrame2D, CoordinateFrame3D, OrbitAngles, Point3f,
    ViewportTransform,
};

/// Capture a frame through `camera` and place it in `viewport`
pub fn project_frame(
    camera: &Camera,
    frame: &CoordinateFrame3D,
    viewport: &ViewportTransform,
) -> CoordinateFrame2D {
    frame.map(|p| viewport.transform_point(&camera.capture_point(&p)))
}

/// The interactive view: a user-rotated camera looking at the model
#[derive(Debug, Clone)]
pub struct OrbitView {
    camera: Camera,
    start: CameraSettings,
    pub show_point_cloud: bool,
    pub controls: RotationControls,
    drag: DragTracker,
    style: DrawStyle,
}

impl OrbitView {
    pub fn new(options: &ViewerOptions) -> Self {
        Self {
            camera: Camera::from_settings(&options.camera),
            start: options.camera.clone(),
            show_point_cloud: options.display.show_point_cloud,
            controls: RotationControls::default(),
            drag: DragTracker::new(options.display.title_bar_inset),
            style: options.display.style.clone(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Put the camera back in its start pose
    pub fn reset(&mut self) {
        self.camera = Camera::from_settings(&self.start);
        log::info!("Camera reset to {:?}", self.camera.position());
    }

    /// Run one frame: rotate from input, then draw the origin frame and the model.
    ///
    /// Returns the rotation applied this frame, if any. Over a viewport without
    /// area nothing rotates and pending step requests wait for the next frame.
    pub fn frame<S: DrawSurface + ?Sized>(
        &mut self,
        input: &FrameInput,
        model: &[Point3f],
        surface: &mut S,
    ) -> Option<OrbitAngles> {
        let dragging = self.drag.update(input);
        let angles = if input.viewport.has_area() {
            self.controls
                .take_motion(dragging, input.pointer_delta)
                .map(|motion| OrbitAngles::from_motion(motion, input.viewport.size()))
        } else {
            None
        };
        if let Some(angles) = angles {
            self.camera.orbit(angles);
        }

        let origin = project_frame(&self.camera, &CoordinateFrame3D::create(), &input.viewport);
        draw_coordinate_frame(surface, &origin, &self.style);

        if self.show_point_cloud {
            let points = input.viewport.transform(&self.camera.capture(model));
            draw_point_cloud(surface, &points, &self.style);
        }

        angles
    }
}

/// The world view: a fixed camera showing the origin and the orbit camera's pose
#[derive(Debug, Clone)]
pub struct WorldView {
    camera: Camera,
    style: DrawStyle,
}

impl WorldView {
    pub fn new(options: &ViewerOptions) -> Self {
        Self {
            camera: Camera::world_from_settings(&options.world_camera),
            style: options.display.style.clone(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Draw the origin frame, `observed`'s frame and a segment joining their origins
    pub fn frame<S: DrawSurface + ?Sized>(
        &self,
        input: &FrameInput,
        observed: &Camera,
        surface: &mut S,
    ) {
        let origin = project_frame(&self.camera, &CoordinateFrame3D::create(), &input.viewport);
        draw_coordinate_frame(surface, &origin, &self.style);

        let observed_frame =
            project_frame(&self.camera, &observed.coordinate_system(), &input.viewport);
        draw_coordinate_frame(surface, &observed_frame, &self.style);

        draw_line_between_points(surface, origin.origin(), observed_frame.origin(), &self.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Color, DrawCommand, RecordingSurface};
    use approx::assert_relative_eq;
    use orbitview_core::{Point2f, Vector2f};

    fn viewport() -> ViewportTransform {
        ViewportTransform::create(Point2f::new(0.0, 0.0), Vector2f::new(800.0, 600.0))
    }

    fn model() -> Vec<Point3f> {
        vec![
            Point3f::new(0.1, 0.1, 0.0),
            Point3f::new(-0.1, 0.2, 0.05),
            Point3f::new(0.0, -0.1, -0.05),
        ]
    }

    #[test]
    fn test_project_frame_matches_capture_then_viewport() {
        let mut camera = Camera::create_default();
        camera.orbit(OrbitAngles::new(0.4, -0.2));
        let viewport = viewport();
        let frame = camera.coordinate_system();

        let by_points = CoordinateFrame2D::from_ordered_points(
            &viewport.transform(&camera.capture(&frame.to_ordered_points())),
        )
        .unwrap();
        assert_eq!(project_frame(&camera, &frame, &viewport), by_points);
    }

    #[test]
    fn test_idle_frame_draws_without_rotating() {
        let mut view = OrbitView::new(&ViewerOptions::default());
        let mut surface = RecordingSurface::new();

        let angles = view.frame(&FrameInput::idle(viewport()), &model(), &mut surface);

        assert_eq!(angles, None);
        assert_eq!(view.camera(), &Camera::create_default());
        // origin marker, three axes, three points
        assert_eq!(surface.commands.len(), 7);
        assert_eq!(surface.circle_count(), 3);
    }

    #[test]
    fn test_hidden_point_cloud_draws_only_frame() {
        let mut view = OrbitView::new(&ViewerOptions::default());
        view.show_point_cloud = false;
        let mut surface = RecordingSurface::new();

        view.frame(&FrameInput::idle(viewport()), &model(), &mut surface);
        assert_eq!(surface.commands.len(), 4);
        assert_eq!(surface.circle_count(), 0);
    }

    #[test]
    fn test_origin_marker_lands_at_view_offset() {
        let mut view = OrbitView::new(&ViewerOptions::default());
        let mut surface = RecordingSurface::new();
        let input = FrameInput::idle(ViewportTransform::create(
            Point2f::new(50.0, 70.0),
            Vector2f::new(800.0, 600.0),
        ));

        view.frame(&input, &[], &mut surface);

        let offset = view.camera().view().offset;
        match &surface.commands[0] {
            DrawCommand::CircleFilled { center, color, .. } => {
                assert_eq!(*color, Color::WHITE);
                let expected = Point2f::new(50.0 + offset.x, 70.0 + offset.y);
                assert_relative_eq!(*center, expected, epsilon = 1e-4);
            }
            other => panic!("expected origin marker first, got {:?}", other),
        }
    }

    #[test]
    fn test_drag_rotates_camera() {
        let mut view = OrbitView::new(&ViewerOptions::default());
        let mut surface = RecordingSurface::new();
        let input = FrameInput {
            pointer_position: Some(Point2f::new(400.0, 300.0)),
            pointer_down: true,
            pointer_delta: Vector2f::new(-200.0, 0.0),
            viewport: viewport(),
        };

        let angles = view.frame(&input, &model(), &mut surface).expect("drag rotates");

        // dragging left by a quarter of the width turns a quarter about up
        assert_relative_eq!(angles.angle_x, std::f32::consts::FRAC_PI_2, epsilon = 1e-5);
        assert!(view.is_dragging());
        assert_relative_eq!(view.camera().position(), Point3f::new(5.0, 0.0, 0.0), epsilon = 1e-4);
    }

    #[test]
    fn test_step_button_rotates_once_and_reset_restores() {
        let mut view = OrbitView::new(&ViewerOptions::default());
        let mut surface = RecordingSurface::new();
        view.controls.request_step_x();

        assert!(view.frame(&FrameInput::idle(viewport()), &[], &mut surface).is_some());
        assert!(view.frame(&FrameInput::idle(viewport()), &[], &mut surface).is_none());
        assert_ne!(view.camera(), &Camera::create_default());

        view.reset();
        assert_eq!(view.camera(), &Camera::create_default());
    }

    #[test]
    fn test_world_view_draws_two_frames_and_link() {
        let options = ViewerOptions::default();
        let world = WorldView::new(&options);
        let orbit = OrbitView::new(&options);
        let mut surface = RecordingSurface::new();

        world.frame(&FrameInput::idle(viewport()), orbit.camera(), &mut surface);

        assert_eq!(surface.commands.len(), 9);
        let markers: Vec<Point2f> = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::CircleFilled { center, .. } => Some(*center),
                _ => None,
            })
            .collect();
        assert_eq!(markers.len(), 2);

        match surface.commands.last() {
            Some(DrawCommand::Line { start, end, color, .. }) => {
                assert_eq!(*color, Color::CYAN);
                assert_eq!(*start, markers[0]);
                assert_eq!(*end, markers[1]);
            }
            other => panic!("expected connecting line last, got {:?}", other),
        }
    }

    #[test]
    fn test_world_view_follows_orbit_camera() {
        let options = ViewerOptions::default();
        let world = WorldView::new(&options);
        let mut orbit = OrbitView::new(&options);
        let mut before = RecordingSurface::new();
        let mut after = RecordingSurface::new();

        world.frame(&FrameInput::idle(viewport()), orbit.camera(), &mut before);
        orbit.controls.request_step_y();
        orbit.frame(&FrameInput::idle(viewport()), &[], &mut RecordingSurface::new());
        world.frame(&FrameInput::idle(viewport()), orbit.camera(), &mut after);

        // world origin frame unchanged, camera frame moved
        assert_eq!(before.commands[..4], after.commands[..4]);
        assert_ne!(before.commands[4], after.commands[4]);
    }

    fn assert_camera_finite(camera: &Camera) {
        let position = camera.position();
        assert!(position.coords.iter().all(|c| c.is_finite()), "position {:?}", position);
        assert!(camera.up_vector().iter().all(|c| c.is_finite()));
        assert!(camera.right_vector().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_zero_height_viewport_does_not_rotate() {
        let mut view = OrbitView::new(&ViewerOptions::default());
        view.controls.auto_rotate_y = true;
        view.controls.request_step_x();
        let flat = ViewportTransform::create(Point2f::new(0.0, 0.0), Vector2f::new(400.0, 0.0));
        let dragging = FrameInput {
            pointer_position: Some(Point2f::new(10.0, 0.0)),
            pointer_down: true,
            pointer_delta: Vector2f::new(5.0, 5.0),
            viewport: flat,
        };

        let angles = view.frame(&dragging, &model(), &mut RecordingSurface::new());
        assert_eq!(angles, None);
        assert_eq!(view.camera(), &Camera::create_default());

        // the next frame with a real viewport rotates and everything stays finite
        let square = ViewportTransform::create(Point2f::new(0.0, 0.0), Vector2f::new(400.0, 400.0));
        let mut surface = RecordingSurface::new();
        let angles = view.frame(&FrameInput::idle(square), &model(), &mut surface);

        // the held step request fires alongside auto rotation
        assert_eq!(angles.map(|a| a.angle_x > 0.0 && a.angle_y > 0.0), Some(true));
        assert_camera_finite(view.camera());
        for command in &surface.commands {
            match command {
                DrawCommand::CircleFilled { center, .. } | DrawCommand::Circle { center, .. } => {
                    assert!(center.x.is_finite() && center.y.is_finite());
                }
                DrawCommand::Line { start, end, .. } => {
                    assert!(start.coords.iter().chain(end.coords.iter()).all(|c| c.is_finite()));
                }
            }
        }
    }

    #[test]
    fn test_window_content_drag_starts_at_top_edge() {
        let options = ViewerOptions::default();
        let press_at_top = FrameInput {
            pointer_position: Some(Point2f::new(400.0, 2.0)),
            pointer_down: true,
            pointer_delta: Vector2f::new(-4.0, 0.0),
            viewport: viewport(),
        };

        let mut framed = OrbitView::new(&options);
        framed.frame(&press_at_top, &[], &mut RecordingSurface::new());
        assert!(!framed.is_dragging());

        let mut content = OrbitView::new(&options.for_window_content());
        let angles = content.frame(&press_at_top, &[], &mut RecordingSurface::new());
        assert!(content.is_dragging());
        assert!(angles.is_some());
    }
}
