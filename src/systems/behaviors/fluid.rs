//! FluidBehavior - liquids (water)
//!
//! Same falling priorities as powder, but a blocked particle wanders one
//! random step sideways instead of piling, which is what levels a surface
//! out over time.

use super::{Behavior, UpdateContext};

pub struct FluidBehavior;

impl FluidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for FluidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let particle = ctx.particle();
        let xi = ctx.x as i32;
        let yi = ctx.y as i32;
        let down = yi - particle.velocity as i32;

        if ctx.open(xi, down) {
            ctx.commit(xi, down, particle);
        } else if ctx.open(xi - 1, down) {
            ctx.commit(xi - 1, down, particle);
        } else if ctx.open(xi + 1, down) {
            ctx.commit(xi + 1, down, particle);
        } else {
            // Blocked below: one lateral draw at the same row. An offset of
            // 0 lands on the particle's own occupied cell and falls through
            // to stay; the draw happens before the test either way.
            let side = xi + ctx.rng.lateral();
            if ctx.open(side, yi) {
                ctx.commit(side, yi, particle);
            } else {
                ctx.stay(particle);
            }
        }
    }
}
