use glam::Vec3;
use voxedit_author::BrushEditor;
use voxedit_common::{BrushShape, GridCell};
use voxedit_render::EditorCamera;

/// Read-only queries over editor state for the UI panel and CLI output.
pub struct EditorInspector;

impl EditorInspector {
    /// Snapshot the values shown in the editor's status panel.
    pub fn summary(
        camera: &EditorCamera,
        editor: &BrushEditor,
        preview: Option<GridCell>,
    ) -> EditorSummary {
        let brush = editor.brush();
        let preview_stack = preview.map_or(0, |cell| Self::placed_at(editor, cell).len());
        EditorSummary {
            camera_position: camera.position,
            yaw: camera.yaw(),
            pitch: camera.pitch(),
            brush_shape: brush.shape,
            brush_size: brush.size,
            placed_count: editor.placed_count(),
            preview,
            preview_stack,
        }
    }

    /// Indices of cubes placed at exactly `cell`, newest first. Brush size
    /// is ignored.
    pub fn placed_at(editor: &BrushEditor, cell: GridCell) -> Vec<usize> {
        editor
            .placed()
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, p)| p.cell == cell)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Status panel values.
#[derive(Debug, Clone)]
pub struct EditorSummary {
    pub camera_position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub brush_shape: BrushShape,
    pub brush_size: f32,
    pub placed_count: usize,
    pub preview: Option<GridCell>,
    /// Cubes already placed at the preview cell.
    pub preview_stack: usize,
}

impl EditorSummary {
    pub fn camera_line(&self) -> String {
        let p = self.camera_position;
        format!("Camera Position: {:.1}, {:.1}, {:.1}", p.x, p.y, p.z)
    }

    pub fn orientation_line(&self) -> String {
        format!("Camera Pitch: {:.1}, Yaw: {:.1}", self.pitch, self.yaw)
    }
}

impl std::fmt::Display for EditorSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Editor: brush={} size={:.1} placed={} preview=",
            self.brush_shape.label(),
            self.brush_size,
            self.placed_count,
        )?;
        match self.preview {
            Some(cell) => write!(f, "{cell} (stack {})", self.preview_stack)?,
            None => write!(f, "none")?,
        }
        write!(f, " | {} | {}", self.camera_line(), self.orientation_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reflects_state() {
        let camera = EditorCamera::new(Vec3::new(1.0, 2.0, 3.0), -30.0, -90.0, 1.0);
        let mut editor = BrushEditor::default();
        editor.place(GridCell::new(0, 0));
        editor.place(GridCell::new(1, 0));

        let summary = EditorInspector::summary(&camera, &editor, Some(GridCell::new(5, 5)));
        assert_eq!(summary.placed_count, 2);
        assert_eq!(summary.preview_stack, 0);
        assert_eq!(summary.pitch, -30.0);
        assert_eq!(summary.yaw, -90.0);
        assert_eq!(summary.camera_line(), "Camera Position: 1.0, 2.0, 3.0");
        assert_eq!(summary.orientation_line(), "Camera Pitch: -30.0, Yaw: -90.0");
    }

    #[test]
    fn summary_display() {
        let camera = EditorCamera::default();
        let editor = BrushEditor::default();
        let s = EditorInspector::summary(&camera, &editor, None).to_string();
        assert!(s.contains("brush=Cube"));
        assert!(s.contains("placed=0"));
        assert!(s.contains("preview=none"));
    }

    #[test]
    fn placed_at_lists_newest_first() {
        let mut editor = BrushEditor::default();
        editor.place(GridCell::new(2, 2));
        editor.place(GridCell::new(0, 1));
        editor.place(GridCell::new(2, 2));

        assert_eq!(EditorInspector::placed_at(&editor, GridCell::new(2, 2)), vec![2, 0]);
        assert!(EditorInspector::placed_at(&editor, GridCell::new(9, 9)).is_empty());
    }

    #[test]
    fn summary_counts_cubes_under_preview() {
        let camera = EditorCamera::default();
        let mut editor = BrushEditor::default();
        editor.set_brush_size(3.0).unwrap();
        editor.place(GridCell::new(2, 2));
        editor.place(GridCell::new(2, 2));

        let on_stack = EditorInspector::summary(&camera, &editor, Some(GridCell::new(2, 2)));
        assert_eq!(on_stack.preview_stack, 2);
        assert!(on_stack.to_string().contains("preview=(2, 2) (stack 2)"));

        // A large cube next door does not count toward its neighbour.
        let beside = EditorInspector::summary(&camera, &editor, Some(GridCell::new(3, 2)));
        assert_eq!(beside.preview_stack, 0);

        let no_preview = EditorInspector::summary(&camera, &editor, None);
        assert_eq!(no_preview.preview_stack, 0);
    }
}
