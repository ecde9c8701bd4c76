//! Per-frame input and the rotation controls it drives

use orbitview_core::{Point2f, Vector2f, ViewportTransform};

/// Input sampled from the windowing layer once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Pointer position in pixels, `None` when the pointer is not over the window
    pub pointer_position: Option<Point2f>,
    pub pointer_down: bool,
    /// Pointer motion since the previous frame, in pixels
    pub pointer_delta: Vector2f,
    /// The view's rectangle on screen; its size must be positive
    pub viewport: ViewportTransform,
}

impl FrameInput {
    /// A frame with the pointer away and the given viewport
    pub fn idle(viewport: ViewportTransform) -> Self {
        Self {
            pointer_position: None,
            pointer_down: false,
            pointer_delta: Vector2f::zeros(),
            viewport,
        }
    }

    fn pointer_moved(&self) -> bool {
        self.pointer_delta.x.abs() > 0.0 || self.pointer_delta.y.abs() > 0.0
    }
}

/// Tracks whether the pointer is dragging the view.
///
/// A drag starts when the primary button is down and the pointer moves inside
/// the viewport (below the title bar). It ends when the button is released or
/// the pointer leaves the viewport.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    dragging: bool,
    title_bar_inset: f32,
}

impl DragTracker {
    pub fn new(title_bar_inset: f32) -> Self {
        Self {
            dragging: false,
            title_bar_inset,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn update(&mut self, input: &FrameInput) -> bool {
        let inside = input
            .pointer_position
            .is_some_and(|p| input.viewport.contains(&p, self.title_bar_inset));

        if !self.dragging && input.pointer_down && inside && input.pointer_moved() {
            self.dragging = true;
        } else if (self.dragging && !input.pointer_down) || !inside {
            self.dragging = false;
        }
        self.dragging
    }
}

/// Automatic and one-shot rotation requests from the view's buttons
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RotationControls {
    /// Turn about the up axis by one pixel's worth every frame
    pub auto_rotate_x: bool,
    /// Turn about the right axis by one pixel's worth every frame
    pub auto_rotate_y: bool,
    step_x: bool,
    step_y: bool,
}

impl RotationControls {
    /// Turn about the up axis once, on the next frame
    pub fn request_step_x(&mut self) {
        self.step_x = true;
    }

    /// Turn about the right axis once, on the next frame
    pub fn request_step_y(&mut self) {
        self.step_y = true;
    }

    pub fn is_animating(&self) -> bool {
        self.auto_rotate_x || self.auto_rotate_y
    }

    /// Pointer-equivalent motion for this frame, or `None` when nothing asks
    /// for rotation.
    ///
    /// Dragging contributes the negated pointer delta; an automatic or
    /// one-shot request replaces that axis with a single pixel. Pending
    /// one-shot requests are consumed.
    pub fn take_motion(&mut self, dragging: bool, pointer_delta: Vector2f) -> Option<Vector2f> {
        let step_x = std::mem::take(&mut self.step_x);
        let step_y = std::mem::take(&mut self.step_y);
        let turn_x = self.auto_rotate_x || step_x;
        let turn_y = self.auto_rotate_y || step_y;

        if !(dragging || turn_x || turn_y) {
            return None;
        }

        let mut motion = if dragging { -pointer_delta } else { Vector2f::zeros() };
        if turn_x {
            motion.x = 1.0;
        }
        if turn_y {
            motion.y = 1.0;
        }
        Some(motion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> ViewportTransform {
        ViewportTransform::create(Point2f::new(100.0, 100.0), Vector2f::new(400.0, 300.0))
    }

    fn input(position: Option<Point2f>, down: bool, delta: Vector2f) -> FrameInput {
        FrameInput {
            pointer_position: position,
            pointer_down: down,
            pointer_delta: delta,
            viewport: viewport(),
        }
    }

    #[test]
    fn test_drag_starts_on_press_and_move_inside() {
        let mut drag = DragTracker::new(15.0);
        let inside = Some(Point2f::new(300.0, 250.0));

        assert!(!drag.update(&input(inside, true, Vector2f::zeros())));
        assert!(!drag.update(&input(inside, false, Vector2f::new(3.0, 0.0))));
        assert!(drag.update(&input(inside, true, Vector2f::new(3.0, 0.0))));
        // holding still keeps the drag
        assert!(drag.update(&input(inside, true, Vector2f::zeros())));
    }

    #[test]
    fn test_drag_ends_on_release() {
        let mut drag = DragTracker::new(15.0);
        let inside = Some(Point2f::new(300.0, 250.0));
        drag.update(&input(inside, true, Vector2f::new(1.0, 1.0)));

        assert!(!drag.update(&input(inside, false, Vector2f::zeros())));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drag_ends_when_pointer_leaves() {
        let mut drag = DragTracker::new(15.0);
        drag.update(&input(Some(Point2f::new(300.0, 250.0)), true, Vector2f::new(1.0, 1.0)));

        let outside = Some(Point2f::new(900.0, 250.0));
        assert!(!drag.update(&input(outside, true, Vector2f::new(1.0, 1.0))));
        assert!(!drag.update(&input(None, true, Vector2f::new(1.0, 1.0))));
    }

    #[test]
    fn test_drag_never_starts_on_title_bar() {
        let mut drag = DragTracker::new(15.0);
        let title_bar = Some(Point2f::new(300.0, 105.0));
        assert!(!drag.update(&input(title_bar, true, Vector2f::new(5.0, 0.0))));
    }

    #[test]
    fn test_no_motion_without_requests() {
        let mut controls = RotationControls::default();
        assert_eq!(controls.take_motion(false, Vector2f::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_drag_motion_is_negated() {
        let mut controls = RotationControls::default();
        assert_eq!(
            controls.take_motion(true, Vector2f::new(4.0, -2.0)),
            Some(Vector2f::new(-4.0, 2.0))
        );
    }

    #[test]
    fn test_auto_rotate_overrides_drag_axis() {
        let mut controls = RotationControls {
            auto_rotate_x: true,
            ..Default::default()
        };
        assert_eq!(
            controls.take_motion(true, Vector2f::new(4.0, -2.0)),
            Some(Vector2f::new(1.0, 2.0))
        );
        assert_eq!(controls.take_motion(false, Vector2f::zeros()), Some(Vector2f::new(1.0, 0.0)));
        assert!(controls.is_animating());
    }

    #[test]
    fn test_step_is_consumed_once() {
        let mut controls = RotationControls::default();
        controls.request_step_y();

        assert_eq!(controls.take_motion(false, Vector2f::zeros()), Some(Vector2f::new(0.0, 1.0)));
        assert_eq!(controls.take_motion(false, Vector2f::zeros()), None);
    }
}
