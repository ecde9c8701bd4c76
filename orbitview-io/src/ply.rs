//! PLY format support

use crate::PointCloudReader;
use orbitview_core::{PointCloud, Result, Point3f, Error};
use std::path::Path;
use std::fs::File;
use std::io::BufReader;
use ply_rs::{
    parser::Parser,
    ply::{Property, DefaultElement},
};

pub struct PlyReader;

impl PointCloudReader for PlyReader {
    fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<Point3f>> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let parser = Parser::<DefaultElement>::new();
        let ply = parser.read_ply(&mut reader)?;

        let vertices = ply.payload.get("vertex").ok_or_else(|| {
            Error::InvalidData("PLY file has no vertex element".to_string())
        })?;

        vertices
            .iter()
            .map(|vertex| {
                let x = extract_property_value(vertex, "x")?;
                let y = extract_property_value(vertex, "y")?;
                let z = extract_property_value(vertex, "z")?;
                Ok(Point3f::new(x, y, z))
            })
            .collect::<Result<Vec<_>>>()
            .map(PointCloud::from_points)
    }
}

/// Extract a property value as f32 from a PLY element
fn extract_property_value(element: &DefaultElement, name: &str) -> Result<f32> {
    match element.get(name) {
        Some(Property::Float(val)) => Ok(*val),
        Some(Property::Double(val)) => Ok(*val as f32),
        Some(Property::Int(val)) => Ok(*val as f32),
        Some(Property::UInt(val)) => Ok(*val as f32),
        Some(Property::Short(val)) => Ok(*val as f32),
        Some(Property::UShort(val)) => Ok(*val as f32),
        _ => Err(Error::InvalidData(
            format!("Property '{}' not found or invalid type", name)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_read_ascii_ply_vertices() {
        let temp_file = "test_ascii_vertices.ply";
        let content = "ply\n\
            format ascii 1.0\n\
            element vertex 3\n\
            property float x\n\
            property float y\n\
            property float z\n\
            end_header\n\
            0.0 0.5 1.0\n\
            -1.5 2.0 3.25\n\
            4.0 5.0 6.0\n";
        fs::write(temp_file, content).unwrap();

        let cloud = PlyReader::read_point_cloud(temp_file).unwrap();
        assert_eq!(cloud.len(), 3);
        assert_eq!(cloud[0], Point3f::new(0.0, 0.5, 1.0));
        assert_eq!(cloud[1], Point3f::new(-1.5, 2.0, 3.25));
        assert_eq!(cloud[2], Point3f::new(4.0, 5.0, 6.0));

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_read_double_properties_with_extras() {
        let temp_file = "test_double_vertices.ply";
        let content = "ply\n\
            format ascii 1.0\n\
            element vertex 2\n\
            property double x\n\
            property double y\n\
            property double z\n\
            property float confidence\n\
            end_header\n\
            1 2 3 0.5\n\
            4 5 6 0.9\n";
        fs::write(temp_file, content).unwrap();

        let cloud = PlyReader::read_point_cloud(temp_file).unwrap();
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud[1], Point3f::new(4.0, 5.0, 6.0));

        fs::remove_file(temp_file).unwrap();
    }

    #[test]
    fn test_missing_coordinate_is_invalid_data() {
        let temp_file = "test_missing_z.ply";
        let content = "ply\n\
            format ascii 1.0\n\
            element vertex 1\n\
            property float x\n\
            property float y\n\
            end_header\n\
            1.0 2.0\n";
        fs::write(temp_file, content).unwrap();

        let result = PlyReader::read_point_cloud(temp_file);
        assert!(matches!(result, Err(Error::InvalidData(_))));

        fs::remove_file(temp_file).unwrap();
    }
}
