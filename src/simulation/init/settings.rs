use crate::core::random::{PcgRandom, RandomSource};
use crate::grid::CollisionPolicy;
use crate::materials::{is_valid_material, MaterialId, MAT_EMPTY};

use super::WorldCore;

pub(super) fn set_material(world: &mut WorldCore, material: MaterialId) {
    // Selecting empty or an unknown id would make the next step() clear the
    // whole grid (no rule writes anything, the buffers still swap), so the
    // selection is ignored instead.
    if material != MAT_EMPTY && is_valid_material(material) {
        world.current_material = material;
    }
}

pub(super) fn set_collision_policy(world: &mut WorldCore, policy: CollisionPolicy) {
    world.grid.set_policy(policy);
}

pub(super) fn reseed(world: &mut WorldCore, seed: u64) {
    world.rng = Box::new(PcgRandom::seeded(seed));
}

pub(super) fn set_random(world: &mut WorldCore, rng: Box<dyn RandomSource>) {
    world.rng = rng;
}
