//! Drawing surface abstraction
//!
//! The views only produce pixel positions; anything that can draw circles and
//! line segments (an egui painter, a recorder in tests) implements
//! [`DrawSurface`].

use orbitview_core::{CoordinateFrame2D, Point2f};
use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Immediate-mode 2D drawing in pixel coordinates
pub trait DrawSurface {
    fn circle_filled(&mut self, center: Point2f, radius: f32, color: Color);

    fn circle(&mut self, center: Point2f, radius: f32, color: Color);

    fn line(&mut self, start: Point2f, end: Point2f, color: Color, width: f32);
}

/// Sizes used when drawing frames and point clouds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawStyle {
    pub origin_marker_radius: f32,
    pub point_radius: f32,
    pub line_width: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            origin_marker_radius: 5.0,
            point_radius: 1.0,
            line_width: 1.0,
        }
    }
}

/// Draw a frame as a white origin marker and red/green/blue X/Y/Z segments
pub fn draw_coordinate_frame<S: DrawSurface + ?Sized>(
    surface: &mut S,
    frame: &CoordinateFrame2D,
    style: &DrawStyle,
) {
    surface.circle_filled(frame.origin(), style.origin_marker_radius, Color::WHITE);
    let colors = [Color::RED, Color::GREEN, Color::BLUE];
    for ((start, end), color) in frame.axis_segments().into_iter().zip(colors) {
        surface.line(start, end, color, style.line_width);
    }
}

pub fn draw_point_cloud<S: DrawSurface + ?Sized>(
    surface: &mut S,
    points: &[Point2f],
    style: &DrawStyle,
) {
    for point in points {
        surface.circle(*point, style.point_radius, Color::MAGENTA);
    }
}

pub fn draw_line_between_points<S: DrawSurface + ?Sized>(
    surface: &mut S,
    start: Point2f,
    end: Point2f,
    style: &DrawStyle,
) {
    surface.line(start, end, Color::CYAN, style.line_width);
}

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    CircleFilled { center: Point2f, radius: f32, color: Color },
    Circle { center: Point2f, radius: f32, color: Color },
    Line { start: Point2f, end: Point2f, color: Color, width: f32 },
}

/// A surface that keeps every call instead of rendering it
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    /// Number of outlined circles, i.e. point-cloud points drawn
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn circle_filled(&mut self, center: Point2f, radius: f32, color: Color) {
        self.commands.push(DrawCommand::CircleFilled { center, radius, color });
    }

    fn circle(&mut self, center: Point2f, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle { center, radius, color });
    }

    fn line(&mut self, start: Point2f, end: Point2f, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line { start, end, color, width });
    }
}
