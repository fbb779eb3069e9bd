use voxedit_common::{Brush, BrushConfig, BrushShape, GridCell, PlacedBrush};
use voxedit_input::ClickEdge;

/// Errors from brush operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BrushError {
    #[error("brush size must be a positive finite number, got {0}")]
    InvalidSize(f32),
    #[error("brush size range [{min}, {max}] must be positive and non-empty")]
    InvalidRange { min: f32, max: f32 },
}

/// Brush state plus the append-only list of placed cubes.
///
/// Placements are never merged or removed: insertion order is placement order
/// and render order.
#[derive(Debug, Clone)]
pub struct BrushEditor {
    brush: Brush,
    min_size: f32,
    max_size: f32,
    placed: Vec<PlacedBrush>,
    click: ClickEdge,
}

impl BrushEditor {
    /// Build an editor from a brush config. The starting size is clamped
    /// into the range; the range itself must be positive and non-empty.
    pub fn new(config: &BrushConfig) -> Result<Self, BrushError> {
        let (min, max) = (config.min_size, config.max_size);
        if !(min > 0.0 && min <= max) {
            return Err(BrushError::InvalidRange { min, max });
        }
        if !config.size.is_finite() {
            return Err(BrushError::InvalidSize(config.size));
        }
        Ok(Self::with_range(config.size.clamp(min, max), min, max))
    }

    fn with_range(size: f32, min_size: f32, max_size: f32) -> Self {
        Self {
            brush: Brush {
                shape: BrushShape::Cube,
                size,
            },
            min_size,
            max_size,
            placed: Vec::new(),
            click: ClickEdge::new(),
        }
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn size_range(&self) -> (f32, f32) {
        (self.min_size, self.max_size)
    }

    pub fn set_brush_shape(&mut self, shape: BrushShape) {
        self.brush.shape = shape;
    }

    /// Set the brush size, clamped into the configured range. Returns the
    /// size actually stored.
    pub fn set_brush_size(&mut self, size: f32) -> Result<f32, BrushError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(BrushError::InvalidSize(size));
        }
        self.brush.size = size.clamp(self.min_size, self.max_size);
        Ok(self.brush.size)
    }

    /// Stamp the current brush at `cell`.
    pub fn place(&mut self, cell: GridCell) -> &PlacedBrush {
        let placed = PlacedBrush::new(self.brush, cell);
        tracing::debug!(
            shape = placed.shape.label(),
            %cell,
            size = placed.size,
            index = self.placed.len(),
            "placed brush"
        );
        self.placed.push(placed);
        &self.placed[self.placed.len() - 1]
    }

    /// Feed this frame's primary-button state.
    ///
    /// On the frame the button goes down, and only if `enabled`, `pick` is
    /// asked for the target cell and the brush is stamped there. The edge
    /// state advances every frame regardless of `enabled`, so a press that
    /// starts over the UI does not place once the pointer leaves it.
    pub fn commit_on_click(
        &mut self,
        pressed: bool,
        enabled: bool,
        pick: impl FnOnce() -> Option<GridCell>,
    ) -> Option<PlacedBrush> {
        if !self.click.update(pressed) || !enabled {
            return None;
        }
        let cell = pick()?;
        Some(*self.place(cell))
    }

    /// Placed cubes in placement order.
    pub fn placed(&self) -> &[PlacedBrush] {
        &self.placed
    }

    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }
}

impl Default for BrushEditor {
    fn default() -> Self {
        let config = BrushConfig::default();
        Self::with_range(config.size, config.min_size, config.max_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit() -> Option<GridCell> {
        Some(GridCell::new(1, 2))
    }

    #[test]
    fn rising_edge_places_once() {
        let mut editor = BrushEditor::default();
        assert!(editor.commit_on_click(false, true, hit).is_none());
        let placed = editor.commit_on_click(true, true, hit).unwrap();
        assert_eq!(placed.cell, GridCell::new(1, 2));
        assert_eq!(editor.placed_count(), 1);
    }

    #[test]
    fn held_button_does_not_repeat() {
        let mut editor = BrushEditor::default();
        editor.commit_on_click(true, true, hit);
        assert_eq!(editor.placed_count(), 1);
        assert!(editor.commit_on_click(true, true, hit).is_none());
        assert_eq!(editor.placed_count(), 1);
    }

    #[test]
    fn pick_only_called_on_edge() {
        let mut editor = BrushEditor::default();
        let mut calls = 0;
        for pressed in [false, true, true, false, false, true] {
            editor.commit_on_click(pressed, true, || {
                calls += 1;
                hit()
            });
        }
        assert_eq!(calls, 2);
        assert_eq!(editor.placed_count(), 2);
    }

    #[test]
    fn miss_places_nothing() {
        let mut editor = BrushEditor::default();
        assert!(editor.commit_on_click(true, true, || None).is_none());
        assert_eq!(editor.placed_count(), 0);
    }

    #[test]
    fn disabled_press_still_consumes_edge() {
        let mut editor = BrushEditor::default();
        assert!(editor.commit_on_click(true, false, hit).is_none());
        // Still held once enabled: no new edge.
        assert!(editor.commit_on_click(true, true, hit).is_none());
        assert_eq!(editor.placed_count(), 0);
    }

    #[test]
    fn placement_uses_brush_at_time_of_click() {
        let mut editor = BrushEditor::default();
        editor.place(GridCell::new(0, 0));
        editor.set_brush_size(2.5).unwrap();
        editor.place(GridCell::new(1, 0));

        let sizes: Vec<f32> = editor.placed().iter().map(|p| p.size).collect();
        assert_eq!(sizes, vec![1.0, 2.5]);
    }

    #[test]
    fn placed_keeps_order_and_duplicates() {
        let mut editor = BrushEditor::default();
        let cells = [GridCell::new(3, 3), GridCell::new(-1, 0), GridCell::new(3, 3)];
        for cell in cells {
            editor.place(cell);
        }
        let got: Vec<GridCell> = editor.placed().iter().map(|p| p.cell).collect();
        assert_eq!(got, cells);
    }

    #[test]
    fn new_rejects_bad_range() {
        let inverted = BrushConfig {
            size: 1.0,
            min_size: 3.0,
            max_size: 0.2,
        };
        assert_eq!(
            BrushEditor::new(&inverted).err(),
            Some(BrushError::InvalidRange { min: 3.0, max: 0.2 })
        );

        let nan = BrushConfig {
            min_size: f32::NAN,
            ..BrushConfig::default()
        };
        assert!(matches!(BrushEditor::new(&nan), Err(BrushError::InvalidRange { .. })));

        let zero = BrushConfig {
            min_size: 0.0,
            ..BrushConfig::default()
        };
        assert!(BrushEditor::new(&zero).is_err());

        let bad_size = BrushConfig {
            size: f32::NAN,
            ..BrushConfig::default()
        };
        assert!(matches!(BrushEditor::new(&bad_size), Err(BrushError::InvalidSize(_))));
    }

    #[test]
    fn new_clamps_starting_size() {
        let config = BrushConfig {
            size: 9.0,
            ..BrushConfig::default()
        };
        let editor = BrushEditor::new(&config).unwrap();
        assert_eq!(editor.brush().size, 3.0);
        assert_eq!(editor.size_range(), (0.2, 3.0));
    }

    #[test]
    fn brush_size_is_clamped() {
        let mut editor = BrushEditor::default();
        assert_eq!(editor.set_brush_size(10.0), Ok(3.0));
        assert_eq!(editor.set_brush_size(0.05), Ok(0.2));
        assert_eq!(editor.brush().size, 0.2);
    }

    #[test]
    fn brush_size_rejects_invalid() {
        let mut editor = BrushEditor::default();
        assert_eq!(editor.set_brush_size(0.0), Err(BrushError::InvalidSize(0.0)));
        assert!(editor.set_brush_size(f32::NAN).is_err());
        assert!(editor.set_brush_size(-1.0).is_err());
        assert_eq!(editor.brush().size, 1.0);
    }
}
