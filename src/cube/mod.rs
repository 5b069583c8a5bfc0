//! Voxel grid state: faces, configuration, and the store

pub mod face;
pub mod config;
pub mod store;

pub use face::{ColorSlot, Face, SideColors};
pub use config::{AnimationConfig, AnimationType, Palette, VisualConfig};
pub use store::{CubeMap, CubeStore, RenderCube, DEFAULT_GRID_SIZE};
