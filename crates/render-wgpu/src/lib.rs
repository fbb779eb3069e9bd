//! wgpu render backend for the voxel editor.
//!
//! Draws the ground grid, placed cubes in placement order, and the translucent
//! brush preview. The camera itself lives in `voxedit-render`; its projection
//! uses OpenGL clip depth and is remapped here for wgpu.
//!
//! # Invariants
//! - Rendering never mutates the camera or the placed list.
//! - GPU resources live exactly as long as the [`WgpuRenderer`].

mod gpu;
mod shaders;

pub use gpu::WgpuRenderer;
