use crate::camera::EditorCamera;
use std::fmt::Write;
use voxedit_common::{GridBounds, GridCell, PlacedBrush};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub camera: &'a EditorCamera,
    pub bounds: GridBounds,
    /// Committed cubes in placement order.
    pub placed: &'a [PlacedBrush],
    /// Cell under the cursor, drawn translucent at `preview_size`.
    pub preview: Option<GridCell>,
    pub preview_size: f32,
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the scene and produces output. It never mutates the
/// camera or the placed list.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the scene.
    fn render(&self, scene: &Scene<'_>) -> Self::Output;
}

/// Produces a human-readable description of the scene. Used by the CLI and
/// by tests of the render interface.
#[derive(Debug)]
pub struct DebugTextRenderer {
    /// Maximum number of placed cubes to list individually.
    pub max_listed: usize,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self { max_listed: 32 }
    }
}

impl Default for DebugTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene<'_>) -> String {
        let cam = scene.camera;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "=== Scene (grid [{:.0}, {:.0}], placed={}) ===",
            scene.bounds.min,
            scene.bounds.max,
            scene.placed.len()
        );
        let _ = writeln!(
            out,
            "Camera: pos=({:.1}, {:.1}, {:.1}) yaw={:.1} pitch={:.1} fov={:.0}",
            cam.position.x,
            cam.position.y,
            cam.position.z,
            cam.yaw(),
            cam.pitch(),
            cam.fov.to_degrees()
        );
        match scene.preview {
            Some(cell) => {
                let _ = writeln!(out, "Preview: {cell} size={:.1}", scene.preview_size);
            }
            None => out.push_str("Preview: none\n"),
        }

        for placed in scene.placed.iter().take(self.max_listed) {
            let _ = writeln!(
                out,
                "  {} at {} size={:.1}",
                placed.shape.label(),
                placed.cell,
                placed.size
            );
        }
        if scene.placed.len() > self.max_listed {
            let _ = writeln!(out, "  ... {} more", scene.placed.len() - self.max_listed);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxedit_common::Brush;

    #[test]
    fn debug_renderer_empty_scene() {
        let camera = EditorCamera::default();
        let scene = Scene {
            camera: &camera,
            bounds: GridBounds::default(),
            placed: &[],
            preview: None,
            preview_size: 1.0,
        };
        let output = DebugTextRenderer::new().render(&scene);

        assert!(output.contains("placed=0"));
        assert!(output.contains("Preview: none"));
        assert!(output.contains("pitch=-30.0"));
    }

    #[test]
    fn debug_renderer_lists_placed_in_order() {
        let camera = EditorCamera::default();
        let placed = [
            PlacedBrush::new(Brush::default(), GridCell::new(1, 2)),
            PlacedBrush::new(Brush::default(), GridCell::new(-3, 0)),
        ];
        let scene = Scene {
            camera: &camera,
            bounds: GridBounds::default(),
            placed: &placed,
            preview: Some(GridCell::new(4, 4)),
            preview_size: 2.0,
        };
        let output = DebugTextRenderer::new().render(&scene);

        assert!(output.contains("placed=2"));
        assert!(output.contains("Preview: (4, 4) size=2.0"));
        let first = output.find("(1, 2)").unwrap();
        let second = output.find("(-3, 0)").unwrap();
        assert!(first < second);
    }

    #[test]
    fn debug_renderer_truncates_long_lists() {
        let camera = EditorCamera::default();
        let placed: Vec<_> = (0..5)
            .map(|i| PlacedBrush::new(Brush::default(), GridCell::new(i, 0)))
            .collect();
        let scene = Scene {
            camera: &camera,
            bounds: GridBounds::default(),
            placed: &placed,
            preview: None,
            preview_size: 1.0,
        };
        let renderer = DebugTextRenderer { max_listed: 2 };
        let output = renderer.render(&scene);
        assert!(output.contains("... 3 more"));
    }
}
