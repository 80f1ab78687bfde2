use crate::grid::Particle;
use crate::materials::{is_valid_material, MaterialId, MAT_EMPTY};

use super::WorldCore;

pub(super) fn add_particle(
    world: &mut WorldCore,
    x: i32,
    y: i32,
    material: MaterialId,
    hue: u16,
) -> bool {
    if !world.grid.in_bounds(x, y) {
        return false;
    }

    // Validate material id
    if material == MAT_EMPTY || !is_valid_material(material) {
        return false;
    }

    world
        .grid
        .set_active(x as u32, y as u32, Particle::new(material, hue));
    true
}

pub(super) fn remove_particle(world: &mut WorldCore, x: i32, y: i32) -> bool {
    if !world.grid.in_bounds(x, y) {
        return false;
    }

    if world.grid.is_empty(x as u32, y as u32) {
        return false;
    }

    world.grid.clear_cell(x as u32, y as u32);
    true
}

/// Probabilistic square stamp around the anchor, straight into the active
/// buffer. Occupied cells are overwritten, not skipped - the brush must be
/// visible on the very frame it is painted. The chance is drawn before the
/// bounds check so off-grid sub-cells still consume a draw, keeping the
/// random stream identical however the stamp is clipped.
pub(super) fn paint(world: &mut WorldCore, anchor_x: i32, anchor_y: i32) {
    let extent = world.settings.brush_extent();
    let probability = world.settings.spawn_probability;
    let material = world.current_material;
    let hue = world.current_hue;

    for dx in -extent..=extent {
        for dy in -extent..=extent {
            if !world.rng.chance(probability) {
                continue;
            }

            let x = anchor_x + dx;
            let y = anchor_y + dy;
            if world.grid.in_bounds(x, y) {
                world
                    .grid
                    .set_active(x as u32, y as u32, Particle::new(material, hue));
            }
        }
    }

    advance_hue(world);
}

// The display hue steps forward after every stamp and wraps from >360 back
// to 1, never 0.
fn advance_hue(world: &mut WorldCore) {
    world.current_hue += 10;
    if world.current_hue > 360 {
        world.current_hue = 1;
    }
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.frame = 0;
}
