use crate::behaviors::UpdateContext;
use crate::materials::category_of;

use super::WorldCore;

/// Advance one frame: clear the next buffer, run the selected material's
/// behavior over every occupied cell of the snapshot, swap buffers.
///
/// Only one behavior runs per frame, and it processes every particle on the
/// grid regardless of that particle's own material - while water is
/// selected, sand on the grid moves by the fluid rule. Dispatch is keyed on
/// the paint selection, not on cell contents.
pub(super) fn step(world: &mut WorldCore) {
    world.grid.clear_next();

    let category = category_of(world.current_material);
    if let Some(behavior) = world.behaviors.get(category) {
        behavior.begin_frame(&mut world.grid, world.rng.as_mut());

        let cols = world.grid.cols();
        let rows = world.grid.rows();

        // Columns outer, rows inner, both ascending. The scan order is
        // observable through last-writer-wins collisions, so it must not
        // change.
        for x in 0..cols {
            for y in 0..rows {
                if world.grid.is_empty(x, y) {
                    continue;
                }
                let mut ctx = UpdateContext {
                    grid: &mut world.grid,
                    x,
                    y,
                    frame: world.frame,
                    rng: world.rng.as_mut(),
                };
                behavior.update(&mut ctx);
            }
        }
    }

    world.grid.swap();
    world.frame = world.frame.wrapping_add(1);
}
