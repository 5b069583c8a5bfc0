//! Central mutable state for the logo cube
//!
//! [`CubeStore`] owns the sparse voxel grid plus the visual, animation,
//! and position state the presentation layer reads. Construction is
//! explicit; there is no global instance. Every mutating call bumps a
//! generation counter so observers can poll for changes instead of
//! relying on reference identity.

use std::collections::HashMap;

use rand::Rng;

use crate::core::types::{IVec3, Vec3};
use crate::cube::config::{AnimationConfig, AnimationType, VisualConfig};
use crate::cube::face::{ColorSlot, Face, SideColors};
use crate::math::GridMetrics;
use crate::pattern::{logo, Pattern};

/// Default grid side length
pub const DEFAULT_GRID_SIZE: i32 = 5;

/// Inclusion probability for [`Pattern::Random`]
const RANDOM_DENSITY: f64 = 0.3;

/// Sparse voxel grid: presence means visible
pub type CubeMap = HashMap<IVec3, SideColors>;

/// One visible voxel resolved for the presentation layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderCube {
    /// Grid coordinate
    pub grid: IVec3,
    /// World position including the grid offset
    pub world: Vec3,
    /// Resolved color slot per face, indexed by [`Face::index`]
    pub faces: [ColorSlot; 6],
}

/// The logo cube state store
#[derive(Clone, Debug)]
pub struct CubeStore {
    size: i32,
    cubes: CubeMap,
    revision: u64,
    pattern_name: String,
    visual: VisualConfig,
    animation: AnimationConfig,
    position: Vec3,
    move_speed: f32,
    keyboard_controls: bool,
}

impl CubeStore {
    /// Create a store with an empty grid
    pub fn new(size: i32) -> Self {
        Self {
            size,
            cubes: CubeMap::new(),
            revision: 0,
            pattern_name: Pattern::Hollow.name().to_string(),
            visual: VisualConfig::default(),
            animation: AnimationConfig::default(),
            position: Vec3::ZERO,
            move_speed: 0.1,
            keyboard_controls: true,
        }
    }

    /// Populate the grid with `pattern` unless a non-empty grid already
    /// exists (a restored or hand-edited pattern is never overwritten)
    pub fn ensure_initialized(&mut self, pattern: Pattern) {
        if self.cubes.is_empty() {
            self.apply_pattern(pattern);
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    // -- Grid mutation ------------------------------------------------------

    /// Toggle a voxel between present and absent.
    ///
    /// Removing a voxel discards its face colors. Out-of-bounds
    /// coordinates are accepted without complaint; bounds checking is the
    /// caller's job.
    pub fn toggle_cube(&mut self, x: i32, y: i32, z: i32) {
        let key = IVec3::new(x, y, z);
        if self.cubes.remove(&key).is_none() {
            self.cubes.insert(key, SideColors::EMPTY);
        }
        self.touch();
    }

    /// Assign a color slot to one face of an existing voxel.
    ///
    /// `Some(B)` marks the face accent, `Some(A)` resets it to primary,
    /// `None` toggles. Never creates a voxel: coloring a missing voxel is
    /// a warned no-op.
    pub fn set_face_color(&mut self, x: i32, y: i32, z: i32, face: Face, slot: Option<ColorSlot>) {
        let key = IVec3::new(x, y, z);
        let Some(sides) = self.cubes.get_mut(&key) else {
            log::warn!("attempted to color face of missing cube at ({x},{y},{z})");
            return;
        };

        match slot {
            Some(slot) => sides.set(face, slot),
            None => sides.toggle(face),
        }
        self.touch();
    }

    /// Reset every face of a voxel to the primary color; no-op when the
    /// voxel is absent
    pub fn clear_face_colors(&mut self, x: i32, y: i32, z: i32) {
        let key = IVec3::new(x, y, z);
        if let Some(sides) = self.cubes.get_mut(&key) {
            sides.clear();
            self.touch();
        }
    }

    // -- Pattern application ------------------------------------------------

    /// Replace the whole grid with a built-in pattern
    pub fn apply_pattern(&mut self, pattern: Pattern) {
        match pattern {
            Pattern::Random => {
                let mut rng = rand::rng();
                let mut cubes = CubeMap::new();
                for x in 0..self.size {
                    for y in 0..self.size {
                        for z in 0..self.size {
                            if rng.random_bool(RANDOM_DENSITY) {
                                cubes.insert(IVec3::new(x, y, z), SideColors::EMPTY);
                            }
                        }
                    }
                }
                self.install(cubes, pattern.name());
            }
            Pattern::Logo => match logo::load() {
                Ok(data) => {
                    let cubes = data.cubes.into_iter().collect();
                    self.visual.colors = data.colors;
                    self.install(cubes, pattern.name());
                }
                Err(e) => {
                    log::error!("failed to load logo table: {e}; falling back to hollow");
                    self.apply_pattern(Pattern::Hollow);
                }
            },
            _ => {
                // Every remaining pattern is a pure predicate
                let predicate = pattern
                    .predicate()
                    .expect("non-predicate patterns handled above");
                self.apply_predicate(pattern.name(), predicate);
            }
        }
    }

    /// Replace the whole grid from a caller-supplied predicate
    pub fn apply_predicate(&mut self, name: &str, visible: impl Fn(i32, i32, i32, i32) -> bool) {
        let mut cubes = CubeMap::new();
        for x in 0..self.size {
            for y in 0..self.size {
                for z in 0..self.size {
                    if visible(x, y, z, self.size) {
                        cubes.insert(IVec3::new(x, y, z), SideColors::EMPTY);
                    }
                }
            }
        }
        self.install(cubes, name);
    }

    /// Atomically install a fully-built grid (bulk load)
    pub fn replace_cubes(&mut self, cubes: CubeMap, pattern_name: &str) {
        self.install(cubes, pattern_name);
    }

    fn install(&mut self, cubes: CubeMap, pattern_name: &str) {
        log::debug!("installing pattern '{pattern_name}' with {} cubes", cubes.len());
        self.cubes = cubes;
        self.pattern_name = pattern_name.to_string();
        self.touch();
    }

    // -- Visual config ------------------------------------------------------

    /// Shallow-merge new palette colors
    pub fn set_colors(&mut self, a: Option<&str>, b: Option<&str>) {
        if let Some(a) = a {
            self.visual.colors.a = a.to_string();
        }
        if let Some(b) = b {
            self.visual.colors.b = b.to_string();
        }
        self.touch();
    }

    /// Set the primary color only
    pub fn set_primary_color(&mut self, color: &str) {
        self.set_colors(Some(color), None);
    }

    /// Set the accent color only
    pub fn set_accent_color(&mut self, color: &str) {
        self.set_colors(None, Some(color));
    }

    pub fn set_cube_size(&mut self, cube_size: f32) {
        self.visual.cube_size = cube_size;
        self.touch();
    }

    pub fn set_gap(&mut self, gap: f32) {
        self.visual.gap = gap;
        self.touch();
    }

    /// Replace the whole visual config (bulk import path)
    pub fn set_visual(&mut self, visual: VisualConfig) {
        self.visual = visual;
        self.touch();
    }

    // -- Animation config ---------------------------------------------------

    pub fn set_animation_type(&mut self, animation_type: AnimationType) {
        self.animation.animation_type = animation_type;
        self.touch();
    }

    pub fn set_animation_speed(&mut self, speed: f32) {
        self.animation.speed = speed;
        self.touch();
    }

    pub fn set_interaction_factor(&mut self, interaction_factor: f32) {
        self.animation.interaction_factor = interaction_factor;
        self.touch();
    }

    pub fn set_ripple_interaction_factor(&mut self, ripple_interaction_factor: f32) {
        self.animation.ripple_interaction_factor = ripple_interaction_factor;
        self.touch();
    }

    pub fn set_animation_delay(&mut self, delay: f32) {
        self.animation.delay = delay;
        self.touch();
    }

    /// Replace the whole animation config (bulk import path)
    pub fn set_animation(&mut self, animation: AnimationConfig) {
        self.animation = animation;
        self.touch();
    }

    // -- Position and input flags -------------------------------------------

    pub fn move_x(&mut self, delta: f32) {
        self.position.x += delta;
        self.touch();
    }

    pub fn move_y(&mut self, delta: f32) {
        self.position.y += delta;
        self.touch();
    }

    pub fn move_z(&mut self, delta: f32) {
        self.position.z += delta;
        self.touch();
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.position = Vec3::new(x, y, z);
        self.touch();
    }

    pub fn reset_position(&mut self) {
        self.position = Vec3::ZERO;
        self.touch();
    }

    pub fn set_keyboard_controls(&mut self, enabled: bool) {
        self.keyboard_controls = enabled;
        self.touch();
    }

    pub fn set_move_speed(&mut self, speed: f32) {
        self.move_speed = speed;
        self.touch();
    }

    // -- Read access --------------------------------------------------------

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn cubes(&self) -> &CubeMap {
        &self.cubes
    }

    pub fn cube_count(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_visible(&self, x: i32, y: i32, z: i32) -> bool {
        self.cubes.contains_key(&IVec3::new(x, y, z))
    }

    /// Face colors of a voxel, when it exists
    pub fn side_colors(&self, x: i32, y: i32, z: i32) -> Option<SideColors> {
        self.cubes.get(&IVec3::new(x, y, z)).copied()
    }

    /// Generation counter; bumped by every mutating call
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Name of the last applied pattern, or "custom" after edits/loads
    pub fn pattern_name(&self) -> &str {
        &self.pattern_name
    }

    pub fn visual(&self) -> &VisualConfig {
        &self.visual
    }

    pub fn animation(&self) -> &AnimationConfig {
        &self.animation
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn keyboard_controls(&self) -> bool {
        self.keyboard_controls
    }

    /// Current grid scalars as a transform bundle
    pub fn metrics(&self) -> GridMetrics {
        GridMetrics::new(self.size, self.visual.cube_size, self.visual.gap)
    }

    /// Visible voxels with resolved world positions and face colors,
    /// sorted by grid coordinate for deterministic iteration
    pub fn render_list(&self) -> Vec<RenderCube> {
        let metrics = self.metrics();
        let mut list: Vec<RenderCube> = self
            .cubes
            .iter()
            .map(|(&grid, sides)| RenderCube {
                grid,
                world: metrics.grid_to_world(grid) + self.position,
                faces: sides.resolved(),
            })
            .collect();
        list.sort_by_key(|c| (c.grid.x, c.grid.y, c.grid.z));
        list
    }
}

impl Default for CubeStore {
    fn default() -> Self {
        let mut store = Self::new(DEFAULT_GRID_SIZE);
        store.ensure_initialized(Pattern::Hollow);
        store
    }
}
