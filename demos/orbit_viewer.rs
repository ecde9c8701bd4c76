//! Interactive orbit viewer
//!
//! Loads a PLY point cloud, keeps every n-th vertex and opens the orbit and
//! world views. Drag inside "3D Viewer" to orbit the camera.
//!
//! ```text
//! cargo run -p orbitview-demos --features viewer --bin orbit_viewer -- --model bunny.ply
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use orbitview_io::load_model_points;
use orbitview_visualization::{show_point_cloud, ViewerOptions};
use std::path::PathBuf;

const DEFAULT_MODEL: &str = "./bunny.ply";

#[derive(Parser, Debug)]
#[command(name = "orbit_viewer", about = "Orbit a camera around a point cloud")]
struct Args {
    /// PLY file to display (default: options file, then ./bunny.ply)
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Keep every n-th vertex of the model
    #[arg(short, long)]
    stride: Option<usize>,

    /// TOML options file
    #[arg(short, long)]
    options: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let options = match &args.options {
        Some(path) => ViewerOptions::load(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => ViewerOptions::default(),
    };

    let model_path = args
        .model
        .or_else(|| options.model.path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL));
    let stride = args.stride.unwrap_or(options.model.stride);

    let cloud = load_model_points(&model_path, stride)
        .with_context(|| format!("Failed to load model {}", model_path.display()))?;

    show_point_cloud(cloud, &options)?;
    Ok(())
}
