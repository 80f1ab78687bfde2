use wasm_bindgen::prelude::*;

use crate::grid::CollisionPolicy;
use crate::settings::SimSettings;

use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world from explicit dimensions, default brush settings.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<World, JsValue> {
        let settings = SimSettings {
            width,
            height,
            cell_size,
            ..SimSettings::default()
        };
        settings.validate().map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: WorldCore::new(settings),
        })
    }

    /// Create a world from a settings JSON document.
    #[wasm_bindgen(js_name = withSettingsJson)]
    pub fn with_settings_json(json: &str) -> Result<World, JsValue> {
        let settings = SimSettings::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: WorldCore::new(settings),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.core.settings().width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.core.settings().height
    }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> u32 {
        self.core.settings().cell_size
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 {
        self.core.cols()
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.core.rows()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn current_material(&self) -> u8 {
        self.core.current_material()
    }

    #[wasm_bindgen(getter)]
    pub fn current_hue(&self) -> u16 {
        self.core.current_hue()
    }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize {
        self.core.particle_count()
    }

    /// Reset the generator to a fresh seed (deterministic replay).
    pub fn reseed(&mut self, seed: u64) {
        self.core.reseed(seed);
    }

    /// Select the paint material; unknown ids are ignored.
    pub fn set_material(&mut self, material: u8) {
        self.core.set_material(material);
    }

    /// Switch destination-collision handling. Default is silent overwrite.
    pub fn set_collision_policy(&mut self, keep_first: bool) {
        let policy = if keep_first {
            CollisionPolicy::KeepFirst
        } else {
            CollisionPolicy::Overwrite
        };
        self.core.set_collision_policy(policy);
    }

    /// Stamp the brush around a grid cell
    pub fn paint(&mut self, col: i32, row: i32) {
        self.core.paint(col, row);
    }

    /// Stamp the brush at a window position (pixels, y growing downward).
    /// Flips y during the conversion so row 0 is the bottom of the window.
    pub fn paint_at(&mut self, x_px: f64, y_px: f64) {
        let cell = self.core.settings().cell_size as f64;
        let height = self.core.settings().height as f64;
        let col = (x_px / cell).floor() as i32;
        let row = ((height - y_px) / cell).floor() as i32;
        self.core.paint(col, row);
    }

    /// Add a single particle at position
    pub fn add_particle(&mut self, col: i32, row: i32, material: u8, hue: u16) -> bool {
        self.core.add_particle(col, row, material, hue)
    }

    /// Remove the particle at position
    pub fn remove_particle(&mut self, col: i32, row: i32) -> bool {
        self.core.remove_particle(col, row)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward one frame
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Dump the active settings as JSON
    pub fn settings_json(&self) -> String {
        self.core.settings().to_json()
    }

    /// Get pointer to the materials array (for JS rendering)
    pub fn materials_ptr(&self) -> *const u8 {
        self.core.materials_ptr()
    }

    /// Get pointer to the hues array (for JS rendering)
    pub fn hues_ptr(&self) -> *const u16 {
        self.core.hues_ptr()
    }

    pub fn materials_len(&self) -> usize {
        self.core.materials_len()
    }

    pub fn materials_len_bytes(&self) -> usize {
        self.core.materials_len_bytes()
    }

    pub fn hues_len(&self) -> usize {
        self.core.hues_len()
    }

    pub fn hues_len_bytes(&self) -> usize {
        self.core.hues_len_bytes()
    }
}
