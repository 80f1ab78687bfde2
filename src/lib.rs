//! Grit Engine - falling-sand particle simulation in WASM
//!
//! The crate is the simulation core only:
//! - spatial/       - Double-buffered grid
//! - systems/       - Per-material movement behaviors
//! - domain/        - Material definitions and settings
//! - core/          - Cross-cutting utilities (random source)
//! - simulation/    - Orchestration and the wasm facade
//!
//! Windowing, rendering, color mapping and input stay with the embedding
//! frontend, which selects a material, paints with the brush, and calls
//! `step()` once per frame.

pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths for the things everybody touches.
pub use spatial::grid;
pub use domain::materials;
pub use domain::settings;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Grit WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::random::{PcgRandom, RandomSource};
pub use grid::{CollisionPolicy, Grid, Particle};
pub use materials::MaterialId;
pub use settings::SimSettings;
pub use simulation::{World, WorldCore};

// Export material constants for JS
#[wasm_bindgen]
pub fn mat_empty() -> u8 { materials::MAT_EMPTY }
#[wasm_bindgen]
pub fn mat_sand() -> u8 { materials::MAT_SAND }
#[wasm_bindgen]
pub fn mat_water() -> u8 { materials::MAT_WATER }
#[wasm_bindgen]
pub fn mat_fire() -> u8 { materials::MAT_FIRE }
#[wasm_bindgen]
pub fn mat_snow() -> u8 { materials::MAT_SNOW }
#[wasm_bindgen]
pub fn mat_spray() -> u8 { materials::MAT_SPRAY }
