//! Viewer options with TOML file support.
//!
//! Every section uses `#[serde(default)]`, so a file that only overrides
//! `[camera]` (or nothing at all) loads cleanly.

use crate::draw::DrawStyle;
use orbitview_core::{CameraSettings, Error, Result, WorldCameraSettings};
use orbitview_io::DEFAULT_STRIDE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level options container
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerOptions {
    /// Start pose of the interactive camera; also used by reset
    pub camera: CameraSettings,
    /// Fixed pose of the world camera
    pub world_camera: WorldCameraSettings,
    pub display: DisplayOptions,
    pub model: ModelOptions,
}

/// What the views draw and how big
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub show_point_cloud: bool,
    /// Height of the strip at the top of a view that never starts a drag
    pub title_bar_inset: f32,
    pub style: DrawStyle,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_point_cloud: true,
            title_bar_inset: 15.0,
            style: DrawStyle::default(),
        }
    }
}

/// Which model to load at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Keep every n-th vertex of the file
    pub stride: usize,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            path: None,
            stride: DEFAULT_STRIDE,
        }
    }
}

impl ViewerOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Options for views drawn inside a window's content area.
    ///
    /// The content area already sits below the title bar, so no inset is kept.
    pub fn for_window_content(&self) -> Self {
        let mut options = self.clone();
        options.display.title_bar_inset = 0.0;
        options
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
