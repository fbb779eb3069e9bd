use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Edge length of one grid cell in world units.
pub const CELL_SIZE: f32 = 1.0;

/// A cell on the ground grid (the y = 0 plane), addressed by its X/Z index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub z: i32,
}

impl GridCell {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// World-space center of the cell on the ground plane.
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(self.x as f32 * CELL_SIZE, 0.0, self.z as f32 * CELL_SIZE)
    }
}

impl std::fmt::Display for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Inclusive placement bounds, shared by the X and Z axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min: f32,
    pub max: f32,
}

impl GridBounds {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether a snapped world coordinate lies inside `[min, max]`.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self {
            min: -500.0,
            max: 500.0,
        }
    }
}

/// Shapes a brush can stamp. Only cubes exist today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrushShape {
    #[default]
    Cube,
}

impl BrushShape {
    pub const ALL: [BrushShape; 1] = [BrushShape::Cube];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cube => "Cube",
        }
    }
}

/// The active brush: what the next placement will stamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    pub shape: BrushShape,
    pub size: f32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            shape: BrushShape::Cube,
            size: 1.0,
        }
    }
}

/// A committed brush instance on the grid.
///
/// Shape and size are captured at placement time; later brush changes do not
/// affect cubes that were already placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedBrush {
    pub shape: BrushShape,
    pub cell: GridCell,
    pub size: f32,
}

impl PlacedBrush {
    pub fn new(brush: Brush, cell: GridCell) -> Self {
        Self {
            shape: brush.shape,
            cell,
            size: brush.size,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.cell.world_position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_world_position_is_on_ground() {
        let p = GridCell::new(3, -2).world_position();
        assert_eq!(p, Vec3::new(3.0, 0.0, -2.0));
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = GridBounds::new(-2.0, 2.0);
        assert!(bounds.contains(2.0));
        assert!(bounds.contains(-2.0));
        assert!(!bounds.contains(3.0));
        assert!(!bounds.contains(-3.0));
    }

    #[test]
    fn placed_brush_captures_brush() {
        let brush = Brush {
            shape: BrushShape::Cube,
            size: 2.5,
        };
        let placed = PlacedBrush::new(brush, GridCell::new(1, 1));
        assert_eq!(placed.size, 2.5);
        assert_eq!(placed.shape, BrushShape::Cube);
        assert_eq!(placed.position(), Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn default_bounds() {
        let bounds = GridBounds::default();
        assert_eq!(bounds.min, -500.0);
        assert_eq!(bounds.max, 500.0);
    }
}
