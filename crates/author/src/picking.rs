//! Screen-to-grid placement: cursor → world ray → ground plane → snapped cell.

use glam::{Mat4, Vec2, Vec3, Vec4};
use voxedit_common::{CELL_SIZE, GridBounds, GridCell};
use voxedit_render::EditorCamera;

/// Below this, a ray's Y component counts as parallel to the ground.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Why a cursor did not resolve to a placeable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementMiss {
    #[error("viewport has a zero dimension")]
    EmptyViewport,
    #[error("ray runs parallel to the ground")]
    ParallelToGround,
    #[error("ground plane is behind the camera")]
    BehindCamera,
    #[error("cell lies outside the grid bounds")]
    OutOfBounds,
    #[error("unprojection produced a non-finite point")]
    Degenerate,
}

/// Ray in world space.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Intersect with the ground plane `y = 0`.
    pub fn intersect_ground(&self) -> Result<Vec3, PlacementMiss> {
        if self.direction.y.abs() < PARALLEL_EPSILON {
            return Err(PlacementMiss::ParallelToGround);
        }
        let t = -self.origin.y / self.direction.y;
        if t < 0.0 {
            return Err(PlacementMiss::BehindCamera);
        }
        Ok(self.origin + self.direction * t)
    }
}

/// Screen pixels (Y down) to normalized device coordinates (Y up).
pub fn screen_to_ndc(cursor: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        2.0 * cursor.x / viewport.x - 1.0,
        1.0 - 2.0 * cursor.y / viewport.y,
    )
}

/// Unproject an NDC position through the inverse view-projection, giving the
/// line of sight between the near (z = -1) and far (z = +1) clip planes.
pub fn ndc_to_ray(ndc: Vec2, view_projection: Mat4) -> Result<Ray, PlacementMiss> {
    let inverse = view_projection.inverse();
    let unproject = |z: f32| {
        let p = inverse * Vec4::new(ndc.x, ndc.y, z, 1.0);
        p.truncate() / p.w
    };
    let near = unproject(-1.0);
    let far = unproject(1.0);

    let ray = Ray::new(near, far - near);
    if !ray.origin.is_finite() || !ray.direction.is_finite() {
        return Err(PlacementMiss::Degenerate);
    }
    Ok(ray)
}

/// Round to the nearest multiple of `cell_size`. Halves round up, so `-0.5`
/// snaps to `0`.
pub fn snap(value: f32, cell_size: f32) -> f32 {
    (value / cell_size + 0.5).floor() * cell_size
}

/// The world ray under a cursor.
pub fn cursor_ray(
    cursor: Vec2,
    viewport: Vec2,
    camera: &EditorCamera,
) -> Result<Ray, PlacementMiss> {
    if !(viewport.x > 0.0 && viewport.y > 0.0) {
        return Err(PlacementMiss::EmptyViewport);
    }
    ndc_to_ray(screen_to_ndc(cursor, viewport), camera.view_projection())
}

/// Resolve a cursor to a grid cell, reporting why when it misses.
pub fn cast(
    cursor: Vec2,
    viewport: Vec2,
    camera: &EditorCamera,
    bounds: GridBounds,
) -> Result<GridCell, PlacementMiss> {
    let hit = cursor_ray(cursor, viewport, camera)?.intersect_ground()?;
    if !hit.is_finite() {
        return Err(PlacementMiss::Degenerate);
    }

    let x = snap(hit.x, CELL_SIZE);
    let z = snap(hit.z, CELL_SIZE);
    if !bounds.contains(x) || !bounds.contains(z) {
        return Err(PlacementMiss::OutOfBounds);
    }
    Ok(GridCell::new(
        (x / CELL_SIZE) as i32,
        (z / CELL_SIZE) as i32,
    ))
}

/// Resolve a cursor to the grid cell it points at, if any.
pub fn resolve(
    cursor: Vec2,
    viewport: Vec2,
    camera: &EditorCamera,
    bounds: GridBounds,
) -> Option<GridCell> {
    cast(cursor, viewport, camera, bounds)
        .inspect_err(|miss| tracing::trace!(?miss, ?cursor, "no placement"))
        .ok()
}
