//! Optional JSON settings file layered on top of the default configuration.
//!
//! The file is only ever read. It carries appearance options only, never
//! signal data or the initial row count. Unknown keys are ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;
use crate::config::TimingDiagramConfig;
use crate::error::SettingsError;

/// Default location: `<config dir>/timing-diagram/settings.json`.
pub fn default_settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("timing-diagram");
    path.push("settings.json");
    path
}

/// Settings file contents. Every field is optional so partial files work.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub title: Option<String>,
    pub window_size: Option<[f32; 2]>,
    pub color_scheme: Option<ColorScheme>,
    pub grid: Option<bool>,
    pub legend: Option<bool>,
    pub axis_labels: Option<bool>,
    pub points: Option<bool>,
}

impl AppSettings {
    pub fn from_json_str(s: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Load from [`default_settings_path`], falling back to empty settings on
    /// any error.
    pub fn load() -> Self {
        let path = default_settings_path();
        match Self::from_path(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                log::debug!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Override the fields of `cfg` that are set in this file.
    pub fn apply(&self, cfg: &mut TimingDiagramConfig) {
        if let Some(title) = &self.title {
            cfg.title = title.clone();
        }
        if let Some(size) = self.window_size {
            cfg.window_size = size;
        }
        if let Some(scheme) = self.color_scheme {
            cfg.color_scheme = scheme;
        }
        if let Some(grid) = self.grid {
            cfg.features.grid = grid;
        }
        if let Some(legend) = self.legend {
            cfg.features.legend = legend;
        }
        if let Some(axis_labels) = self.axis_labels {
            cfg.features.axis_labels = axis_labels;
        }
        if let Some(points) = self.points {
            cfg.features.points = points;
        }
    }
}
