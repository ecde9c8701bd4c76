//! Headless orbit demo
//!
//! Runs the orbit and world views for a number of frames without opening a
//! window and logs what the last frame drew. Without `--model` a synthetic
//! sphere is used.

use anyhow::{Context, Result};
use clap::Parser;
use orbitview_core::{Point2f, Point3f, PointCloud, Vector2f, ViewportTransform};
use orbitview_io::load_model_points;
use orbitview_visualization::{render_headless, DrawCommand, FrameInput, ViewerOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "headless_orbit", about = "Run the orbit pipeline without a window")]
struct Args {
    /// PLY file to project
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Keep every n-th vertex of the model
    #[arg(short, long)]
    stride: Option<usize>,

    /// TOML options file
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 60)]
    frames: usize,

    /// Rotate about both axes every frame
    #[arg(long)]
    auto_rotate: bool,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f32,
}

fn sphere_cloud(count: usize) -> PointCloud<Point3f> {
    let golden_ratio = (1.0 + 5.0_f32.sqrt()) / 2.0;
    (0..count)
        .map(|i| {
            let theta = std::f32::consts::TAU * i as f32 / golden_ratio;
            let z = 1.0 - 2.0 * (i as f32 + 0.5) / count as f32;
            let r = (1.0 - z * z).sqrt();
            Point3f::new(0.5 * r * theta.cos(), 0.5 * r * theta.sin(), 0.5 * z)
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    anyhow::ensure!(
        args.width > 0.0 && args.height > 0.0,
        "Viewport size must be positive, got {}x{}",
        args.width,
        args.height
    );

    let options = match &args.options {
        Some(path) => ViewerOptions::load(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => ViewerOptions::default(),
    };
    let stride = args.stride.unwrap_or(options.model.stride);

    let cloud = match args.model.or_else(|| options.model.path.clone()) {
        Some(path) => load_model_points(&path, stride)
            .with_context(|| format!("Failed to load model {}", path.display()))?,
        None => {
            log::info!("No model given, using a synthetic sphere");
            sphere_cloud(500)
        }
    };

    let input = FrameInput::idle(ViewportTransform::create(
        Point2f::new(0.0, 0.0),
        Vector2f::new(args.width, args.height),
    ));
    let surface = render_headless(&cloud, &options, &input, args.frames, args.auto_rotate);

    let markers: Vec<Point2f> = surface
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::CircleFilled { center, .. } => Some(*center),
            _ => None,
        })
        .collect();

    log::info!(
        "Last frame: {} commands, {} points, {} lines",
        surface.commands.len(),
        surface.circle_count(),
        surface.lines().count()
    );
    for (name, marker) in ["orbit origin", "world origin", "camera"].iter().zip(&markers) {
        log::info!("{:>12}: ({:.1}, {:.1})", name, marker.x, marker.y);
    }
    Ok(())
}
