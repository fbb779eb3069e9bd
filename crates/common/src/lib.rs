//! Shared types for the voxel editor: grid cells, brushes, placed cubes, and
//! the editor configuration.

pub mod config;
pub mod types;

pub use config::{BrushConfig, CameraConfig, ConfigError, EditorConfig, GridConfig};
pub use types::{Brush, BrushShape, CELL_SIZE, GridBounds, GridCell, PlacedBrush};

pub fn crate_info() -> &'static str {
    "voxedit-common v0.1.0"
}
