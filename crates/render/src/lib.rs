//! Rendering adapter: the editor camera and a renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers never mutate the camera or the placed list.
//! - The camera's `front`/`right`/`up` basis is orthonormal after every
//!   orientation change.
//!
//! The GPU backend lives in `voxedit-render-wgpu`; this crate has no graphics
//! API dependency so the placement core and CLI can use the camera headless.

mod camera;
mod renderer;

pub use camera::{EditorCamera, PITCH_LIMIT};
pub use renderer::{DebugTextRenderer, Renderer, Scene};

pub fn crate_info() -> &'static str {
    "voxedit-render v0.1.0"
}
