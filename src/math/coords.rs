//! Grid/world coordinate transforms
//!
//! Centralizes the conversion between integer grid coordinates and scene
//! world positions so every consumer agrees on one axis convention.
//!
//! The grid is centered at the origin. The X axis is mirrored: increasing
//! grid-x moves toward negative world-x. This is the authoritative
//! convention for the whole crate; [`world_to_grid`] is its exact inverse.

use crate::core::types::{IVec3, Vec3};

/// Convert grid coordinates to world coordinates.
///
/// `offset = (size - 1) / 2` centers the grid; each step is
/// `cube_size + gap` world units.
pub fn grid_to_world(x: i32, y: i32, z: i32, size: i32, cube_size: f32, gap: f32) -> Vec3 {
    let offset = (size - 1) as f32 / 2.0;
    let step = cube_size + gap;

    Vec3::new(
        (offset - x as f32) * step,
        (y as f32 - offset) * step,
        (z as f32 - offset) * step,
    )
}

/// Convert a world position back to grid coordinates.
///
/// Inverse of [`grid_to_world`]; each component is rounded to the nearest
/// integer, so any point inside a cell maps to that cell.
pub fn world_to_grid(world: Vec3, size: i32, cube_size: f32, gap: f32) -> IVec3 {
    let offset = (size - 1) as f32 / 2.0;
    let step = cube_size + gap;

    IVec3::new(
        (offset - world.x / step).round() as i32,
        (world.y / step + offset).round() as i32,
        (world.z / step + offset).round() as i32,
    )
}

/// Check if a grid position is within the `size^3` bounds
pub fn is_within_bounds(x: i32, y: i32, z: i32, size: i32) -> bool {
    x >= 0 && x < size && y >= 0 && y < size && z >= 0 && z < size
}

/// Grid scalars bundled together so call sites cannot mix settings
/// from different grids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMetrics {
    /// Side length of the grid in cells
    pub size: i32,
    /// Edge length of a rendered cube
    pub cube_size: f32,
    /// Spacing between adjacent cube centers beyond `cube_size`
    pub gap: f32,
}

impl GridMetrics {
    pub fn new(size: i32, cube_size: f32, gap: f32) -> Self {
        Self { size, cube_size, gap }
    }

    /// World position of a grid cell center
    pub fn grid_to_world(&self, grid: IVec3) -> Vec3 {
        grid_to_world(grid.x, grid.y, grid.z, self.size, self.cube_size, self.gap)
    }

    /// Grid cell containing a world position
    pub fn world_to_grid(&self, world: Vec3) -> IVec3 {
        world_to_grid(world, self.size, self.cube_size, self.gap)
    }

    /// Check if a grid position is in bounds
    pub fn contains(&self, grid: IVec3) -> bool {
        is_within_bounds(grid.x, grid.y, grid.z, self.size)
    }
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            size: 5,
            cube_size: 0.8,
            gap: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_to_world_center() {
        // The grid center cell sits at the world origin
        let w = grid_to_world(2, 2, 2, 5, 0.8, 0.2);
        assert_eq!(w, Vec3::ZERO);
    }

    #[test]
    fn test_x_axis_mirrored() {
        // Increasing grid-x moves toward negative world-x
        let w0 = grid_to_world(0, 0, 0, 5, 0.8, 0.2);
        let w4 = grid_to_world(4, 0, 0, 5, 0.8, 0.2);
        assert!(w0.x > w4.x);
        assert_eq!(w0.x, 2.0);
        assert_eq!(w4.x, -2.0);
    }

    #[test]
    fn test_round_trip_all_cells() {
        for &(cube_size, gap) in &[(0.8f32, 0.2f32), (1.0, 0.0), (0.35, 0.07), (2.5, 1.25)] {
            for size in [1, 2, 5, 7] {
                for x in 0..size {
                    for y in 0..size {
                        for z in 0..size {
                            let w = grid_to_world(x, y, z, size, cube_size, gap);
                            let g = world_to_grid(w, size, cube_size, gap);
                            assert_eq!(g, IVec3::new(x, y, z));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_trip_off_center() {
        // Points near a cell center still resolve to that cell
        let w = grid_to_world(1, 3, 0, 5, 0.8, 0.2) + Vec3::splat(0.3);
        assert_eq!(world_to_grid(w, 5, 0.8, 0.2), IVec3::new(1, 3, 0));
    }

    #[test]
    fn test_is_within_bounds() {
        assert!(is_within_bounds(0, 0, 0, 5));
        assert!(is_within_bounds(4, 4, 4, 5));
        assert!(!is_within_bounds(5, 0, 0, 5));
        assert!(!is_within_bounds(0, -1, 0, 5));
    }

    #[test]
    fn test_metrics_agree_with_free_functions() {
        let m = GridMetrics::new(5, 0.8, 0.2);
        let g = IVec3::new(1, 2, 3);
        assert_eq!(m.grid_to_world(g), grid_to_world(1, 2, 3, 5, 0.8, 0.2));
        assert_eq!(m.world_to_grid(m.grid_to_world(g)), g);
        assert!(m.contains(g));
        assert!(!m.contains(IVec3::new(5, 0, 0)));
    }
}
