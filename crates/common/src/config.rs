//! Editor configuration, loadable from a JSON file.
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides:
//! ```json
//! { "grid": { "min": -50.0, "max": 50.0 }, "camera": { "speed": 20.0 } }
//! ```

use crate::types::GridBounds;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid grid bounds: min {min} must be below max {max}")]
    GridBounds { min: f32, max: f32 },
    #[error("grid line spacing must be positive, got {0}")]
    LineSpacing(f32),
    #[error("invalid clip planes: near {near}, far {far}")]
    ClipPlanes { near: f32, far: f32 },
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("invalid brush range [{min}, {max}] for default size {size}")]
    BrushRange { min: f32, max: f32, size: f32 },
}

/// Initial camera placement and its tuning constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    /// Degrees.
    pub yaw: f32,
    /// Degrees, clamped by the camera.
    pub pitch: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// World units per second.
    pub speed: f32,
    /// Degrees per pixel of cursor motion.
    pub sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 10.0),
            yaw: -90.0,
            pitch: -30.0,
            fov_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
            speed: 10.0,
            sensitivity: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub min: f32,
    pub max: f32,
    /// Distance between drawn grid lines. Placement always snaps to single cells.
    pub line_spacing: f32,
}

impl GridConfig {
    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(self.min, self.max)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        let bounds = GridBounds::default();
        Self {
            min: bounds.min,
            max: bounds.max,
            line_spacing: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub size: f32,
    pub min_size: f32,
    pub max_size: f32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            size: 1.0,
            min_size: 0.2,
            max_size: 3.0,
        }
    }
}

/// Top-level editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub camera: CameraConfig,
    pub grid: GridConfig,
    pub brush: BrushConfig,
}

impl EditorConfig {
    /// Read a JSON config file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded editor config");
        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = &self.grid;
        if !(grid.min < grid.max) {
            return Err(ConfigError::GridBounds {
                min: grid.min,
                max: grid.max,
            });
        }
        if !(grid.line_spacing > 0.0) {
            return Err(ConfigError::LineSpacing(grid.line_spacing));
        }

        let cam = &self.camera;
        if !(cam.near > 0.0 && cam.far > cam.near) {
            return Err(ConfigError::ClipPlanes {
                near: cam.near,
                far: cam.far,
            });
        }
        for (field, value) in [
            ("camera.fov_degrees", cam.fov_degrees),
            ("camera.speed", cam.speed),
            ("camera.sensitivity", cam.sensitivity),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let brush = &self.brush;
        let range_ok = brush.min_size > 0.0 && brush.min_size <= brush.max_size;
        if !range_ok || !(brush.min_size..=brush.max_size).contains(&brush.size) {
            return Err(ConfigError::BrushRange {
                min: brush.min_size,
                max: brush.max_size,
                size: brush.size,
            });
        }
        Ok(())
    }
}
