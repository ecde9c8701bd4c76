//! Point cloud loading for orbitview
//!
//! The viewer loads its model once at startup: read the file, keep every
//! n-th vertex, and make sure what is left can be projected.

pub mod ply;

pub use ply::PlyReader;

use orbitview_core::{Error, PointCloud, Point3f, Result};
use std::path::Path;

/// Default down-sampling stride for models loaded by the viewer
pub const DEFAULT_STRIDE: usize = 10;

/// Trait for reading point clouds from files
pub trait PointCloudReader {
    fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<Point3f>>;
}

/// Auto-detect format and read point cloud
pub fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<Point3f>> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("ply") | Some("PLY") => ply::PlyReader::read_point_cloud(path),
        _ => Err(Error::UnsupportedFormat(
            format!("Unsupported point cloud format: {:?}", path.extension())
        )),
    }
}

/// Load the model shown by the viewer.
///
/// Keeps every `stride`-th vertex starting with the first and rejects empty
/// results and non-finite coordinates.
pub fn load_model_points<P: AsRef<Path>>(path: P, stride: usize) -> Result<PointCloud<Point3f>> {
    let path = path.as_ref();
    let cloud = read_point_cloud(path)?;
    let sampled = cloud.downsample(stride);
    validate_points(&sampled)?;

    log::info!(
        "Loaded {} of {} points from {} (stride {})",
        sampled.len(),
        cloud.len(),
        path.display(),
        stride
    );
    Ok(sampled)
}

/// Check that a cloud is non-empty and every coordinate is finite
pub fn validate_points(cloud: &PointCloud<Point3f>) -> Result<()> {
    if cloud.is_empty() {
        return Err(Error::InvalidData("Point cloud contains no points".to_string()));
    }
    if let Some(index) = cloud.iter().position(|p| !p.coords.iter().all(|c| c.is_finite())) {
        return Err(Error::InvalidData(format!(
            "Point {} has a non-finite coordinate: {:?}",
            index, cloud[index]
        )));
    }
    Ok(())
}
