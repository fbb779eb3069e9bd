//! In-world authoring: cursor picking onto the ground grid and brush placement.
//!
//! # Invariants
//! - Picking is a pure function of cursor, viewport, camera and grid bounds.
//! - Placed cubes are append-only; one physical click places at most one cube.

mod editor;
pub mod picking;

pub use editor::{BrushEditor, BrushError};
pub use picking::{PlacementMiss, Ray, cast, resolve};

pub fn crate_info() -> &'static str {
    "voxedit-author v0.1.0"
}
