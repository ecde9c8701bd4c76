//! Interactive viewer window
//!
//! Two egui windows share one orbit camera: "3D Viewer" rotates it and draws
//! the model, "3D World View" watches it from the fixed world camera.

use eframe::egui;
use egui::{Color32, Painter, Pos2, Rect, Sense, Stroke};

use orbitview_core::{convert, Error, Point2f, Point3f, PointCloud, Result, ViewportTransform};

use crate::draw::{Color, DrawSurface};
use crate::input::FrameInput;
use crate::options::ViewerOptions;
use crate::view::{OrbitView, WorldView};

const WINDOW_FILL: Color32 = Color32::from_rgb(89, 77, 77);

/// [`DrawSurface`] over an egui painter
pub struct EguiSurface {
    painter: Painter,
}

impl EguiSurface {
    pub fn new(painter: Painter) -> Self {
        Self { painter }
    }
}

fn color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

impl DrawSurface for EguiSurface {
    fn circle_filled(&mut self, center: Point2f, radius: f32, color: Color) {
        self.painter.circle_filled(convert::<Pos2, _>(center), radius, color32(color));
    }

    fn circle(&mut self, center: Point2f, radius: f32, color: Color) {
        self.painter
            .circle_stroke(convert::<Pos2, _>(center), radius, Stroke::new(1.0, color32(color)));
    }

    fn line(&mut self, start: Point2f, end: Point2f, color: Color, width: f32) {
        self.painter.line_segment(
            [convert::<Pos2, _>(start), convert::<Pos2, _>(end)],
            Stroke::new(width, color32(color)),
        );
    }
}

/// Sample this frame's pointer state against a view rectangle
fn frame_input(ctx: &egui::Context, rect: Rect) -> FrameInput {
    ctx.input(|i| FrameInput {
        pointer_position: i.pointer.hover_pos().map(convert::<Point2f, _>),
        pointer_down: i.pointer.primary_down(),
        pointer_delta: convert(i.pointer.delta()),
        viewport: ViewportTransform::create(convert(rect.min), convert(rect.size())),
    })
}

/// The viewer application state
pub struct OrbitViewerApp {
    model: PointCloud<Point3f>,
    orbit: OrbitView,
    world: WorldView,
    show_3d_window: bool,
    last_rotation: Option<[f32; 2]>,
}

impl OrbitViewerApp {
    pub fn new(model: PointCloud<Point3f>, options: &ViewerOptions) -> Self {
        let options = options.for_window_content();
        Self {
            model,
            orbit: OrbitView::new(&options),
            world: WorldView::new(&options),
            show_3d_window: true,
            last_rotation: None,
        }
    }

    /// Open the native window and block until it is closed
    pub fn run(self) -> Result<()> {
        log::info!("Starting orbitview with {} model points", self.model.len());

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title("orbitview")
                .with_inner_size([1280.0, 720.0]),
            ..Default::default()
        };

        eframe::run_native(
            "orbitview",
            native_options,
            Box::new(|_cc| Ok(Box::new(self))),
        )
        .map_err(|e| Error::Visualization(format!("Failed to run viewer: {}", e)))
    }

    fn control_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("orbitview");
            ui.checkbox(&mut self.show_3d_window, "3D Window");
            ui.label(format!("{} model points", self.model.len()));
            if let Some(pos) = ctx.input(|i| i.pointer.hover_pos()) {
                ui.label(format!("x: {}  y: {}", pos.x, pos.y));
            }
        });
    }

    fn orbit_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_3d_window;
        let mut close = false;

        egui::Window::new("3D Viewer")
            .open(&mut open)
            .default_size([600.0, 600.0])
            .frame(egui::Frame::window(&ctx.style()).fill(WINDOW_FILL))
            .show(ctx, |ui| {
                if ui.button("Close Me").clicked() {
                    close = true;
                }
                if ui.button("Reset").clicked() {
                    self.orbit.reset();
                }
                ui.checkbox(&mut self.orbit.show_point_cloud, "display pointcloud");
                ui.checkbox(&mut self.orbit.controls.auto_rotate_y, "automatic y");
                ui.checkbox(&mut self.orbit.controls.auto_rotate_x, "automatic x");
                if ui.button("+Y").clicked() {
                    self.orbit.controls.request_step_y();
                }
                if ui.button("+X").clicked() {
                    self.orbit.controls.request_step_x();
                }
                if let Some([x, y]) = self.last_rotation {
                    ui.label(format!("Rotation: {:.4} {:.4}", x, y));
                }

                // claim the drag so the window does not move while orbiting
                let rect = ui.available_rect_before_wrap();
                ui.allocate_rect(rect, Sense::drag());

                let input = frame_input(ctx, rect);
                if !input.viewport.has_area() {
                    return;
                }
                let mut surface = EguiSurface::new(ui.painter_at(rect));
                self.last_rotation = self
                    .orbit
                    .frame(&input, self.model.as_slice(), &mut surface)
                    .map(|a| [a.angle_x, a.angle_y]);
            });

        self.show_3d_window = open && !close;
    }

    fn world_window(&mut self, ctx: &egui::Context) {
        let mut open = self.show_3d_window;
        let mut close = false;

        egui::Window::new("3D World View")
            .open(&mut open)
            .default_size([600.0, 600.0])
            .frame(egui::Frame::window(&ctx.style()).fill(WINDOW_FILL))
            .show(ctx, |ui| {
                if ui.button("Close Me").clicked() {
                    close = true;
                }
                let position = self.orbit.camera().position();
                ui.label(format!(
                    "Camera Position\n{:.6} {:.6} {:.6}",
                    position.x, position.y, position.z
                ));

                let rect = ui.available_rect_before_wrap();
                ui.allocate_rect(rect, Sense::hover());

                let input = frame_input(ctx, rect);
                if !input.viewport.has_area() {
                    return;
                }
                let mut surface = EguiSurface::new(ui.painter_at(rect));
                self.world.frame(&input, self.orbit.camera(), &mut surface);
            });

        self.show_3d_window = self.show_3d_window && open && !close;
    }
}

impl eframe::App for OrbitViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.control_panel(ctx);

        if self.show_3d_window {
            self.orbit_window(ctx);
            self.world_window(ctx);
        }

        if self.orbit.controls.is_animating() || self.orbit.is_dragging() {
            ctx.request_repaint();
        }
    }
}
