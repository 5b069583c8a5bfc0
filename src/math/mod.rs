//! Mathematical utilities

pub mod coords;

pub use coords::{GridMetrics, grid_to_world, is_within_bounds, world_to_grid};
