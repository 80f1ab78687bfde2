use crate::materials::MaterialId;

use super::WorldCore;

// Zero-copy render extraction: the frontend views the active buffer's
// arrays directly out of wasm memory, one u8 material id and one u16 hue
// per cell, row-major from the bottom row up.

pub(super) fn materials_ptr(world: &WorldCore) -> *const MaterialId {
    world.grid.materials_ptr()
}

pub(super) fn hues_ptr(world: &WorldCore) -> *const u16 {
    world.grid.hues_ptr()
}

pub(super) fn materials_len(world: &WorldCore) -> usize {
    world.grid.size()
}

pub(super) fn materials_len_bytes(world: &WorldCore) -> usize {
    world.grid.size() * std::mem::size_of::<MaterialId>()
}

pub(super) fn hues_len(world: &WorldCore) -> usize {
    world.grid.size()
}

pub(super) fn hues_len_bytes(world: &WorldCore) -> usize {
    world.grid.size() * std::mem::size_of::<u16>()
}

pub(super) fn particle_count(world: &WorldCore) -> usize {
    world.grid.occupied_count()
}
