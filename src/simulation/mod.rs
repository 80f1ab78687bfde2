//! WorldCore - simulation orchestration
//!
//! The core only orchestrates: per-frame buffer discipline and dispatch to
//! the selected material's behavior. Movement rules live in
//! systems/behaviors, the brush in commands, configuration in domain.

use crate::behaviors::BehaviorRegistry;
use crate::core::random::RandomSource;
use crate::grid::{CollisionPolicy, Grid};
use crate::materials::MaterialId;
use crate::settings::SimSettings;

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

pub use facade::World;

/// The simulation world.
pub struct WorldCore {
    settings: SimSettings,
    grid: Grid,
    behaviors: BehaviorRegistry,

    // State
    current_material: MaterialId,
    current_hue: u16,
    frame: u64,
    rng: Box<dyn RandomSource>,
}

impl WorldCore {
    /// Create a world with the default seeded generator.
    pub fn new(settings: SimSettings) -> Self {
        init::create_world_core(settings)
    }

    /// Create a world with an injected random source.
    pub fn with_random(settings: SimSettings, rng: Box<dyn RandomSource>) -> Self {
        init::create_world_core_with_random(settings, rng)
    }

    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    pub fn cols(&self) -> u32 {
        self.grid.cols()
    }

    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn current_material(&self) -> MaterialId {
        self.current_material
    }

    pub fn current_hue(&self) -> u16 {
        self.current_hue
    }

    /// Grid access for native renderers (`grid().occupied()`).
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Select the paint material; unknown or empty ids are ignored.
    pub fn set_material(&mut self, material: MaterialId) {
        settings::set_material(self, material);
    }

    pub fn set_collision_policy(&mut self, policy: CollisionPolicy) {
        settings::set_collision_policy(self, policy);
    }

    /// Replace the generator with a freshly seeded one.
    pub fn reseed(&mut self, seed: u64) {
        settings::reseed(self, seed);
    }

    /// Replace the generator with an arbitrary source.
    pub fn set_random(&mut self, rng: Box<dyn RandomSource>) {
        settings::set_random(self, rng);
    }

    /// Add a single particle at position
    pub fn add_particle(&mut self, x: i32, y: i32, material: MaterialId, hue: u16) -> bool {
        commands::add_particle(self, x, y, material, hue)
    }

    /// Remove the particle at position
    pub fn remove_particle(&mut self, x: i32, y: i32) -> bool {
        commands::remove_particle(self, x, y)
    }

    /// Stamp the brush around an anchor cell
    pub fn paint(&mut self, anchor_x: i32, anchor_y: i32) {
        commands::paint(self, anchor_x, anchor_y)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Step the simulation forward one frame
    pub fn step(&mut self) {
        step::step(self);
    }

    pub fn particle_count(&self) -> usize {
        render_extract::particle_count(self)
    }

    /// Get pointer to the materials array (for JS rendering)
    pub fn materials_ptr(&self) -> *const MaterialId {
        render_extract::materials_ptr(self)
    }

    /// Get pointer to the hues array (for JS rendering)
    pub fn hues_ptr(&self) -> *const u16 {
        render_extract::hues_ptr(self)
    }

    pub fn materials_len(&self) -> usize {
        render_extract::materials_len(self)
    }

    pub fn materials_len_bytes(&self) -> usize {
        render_extract::materials_len_bytes(self)
    }

    pub fn hues_len(&self) -> usize {
        render_extract::hues_len(self)
    }

    pub fn hues_len_bytes(&self) -> usize {
        render_extract::hues_len_bytes(self)
    }
}
