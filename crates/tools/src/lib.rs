//! Developer tooling: editor state inspection for UI panels and CLI output.

mod inspector;

pub use inspector::{EditorInspector, EditorSummary};

pub fn crate_info() -> &'static str {
    "voxedit-tools v0.1.0"
}
