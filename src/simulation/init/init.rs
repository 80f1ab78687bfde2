use crate::behaviors::BehaviorRegistry;
use crate::core::random::{PcgRandom, RandomSource};
use crate::grid::Grid;
use crate::materials::{MaterialId, MAT_SPRAY};
use crate::settings::SimSettings;

use super::WorldCore;

/// Seed used when no explicit seed is supplied.
const DEFAULT_SEED: u64 = 12345;

// Startup state: water spray selected, hue partway round the wheel.
const INITIAL_MATERIAL: MaterialId = MAT_SPRAY;
const INITIAL_HUE: u16 = 250;

pub(super) fn create_world_core(settings: SimSettings) -> WorldCore {
    create_world_core_with_random(settings, Box::new(PcgRandom::seeded(DEFAULT_SEED)))
}

pub(super) fn create_world_core_with_random(
    settings: SimSettings,
    rng: Box<dyn RandomSource>,
) -> WorldCore {
    WorldCore {
        grid: Grid::new(settings.cols(), settings.rows()),
        behaviors: BehaviorRegistry::new(),
        settings,
        current_material: INITIAL_MATERIAL,
        current_hue: INITIAL_HUE,
        frame: 0,
        rng,
    }
}
