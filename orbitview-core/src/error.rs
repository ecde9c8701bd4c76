//! Error types for orbitview

use thiserror::Error;

/// Main error type for orbitview operations
#[derive(Error, Debug)]
pub enum Error {
    /// A coordinate frame was rebuilt from a point sequence that does not
    /// hold exactly `[origin, axis_x, axis_y, axis_z]`.
    #[error("Malformed frame: expected 4 points, got {len}")]
    MalformedFrame { len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Visualization error: {0}")]
    Visualization(String),
}

/// Result type alias for orbitview operations
pub type Result<T> = std::result::Result<T, Error>;
