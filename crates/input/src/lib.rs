//! Editor input: logical actions, per-frame snapshots, click edges.
//!
//! # Invariants
//! - The core never sees platform key codes, only [`Action`]s.
//! - A held button produces exactly one click edge.

pub mod action;
pub mod frame;

pub use action::{Action, ParseActionError};
pub use frame::{ClickEdge, FrameInput};

pub fn crate_info() -> &'static str {
    "voxedit-input v0.1.0"
}
