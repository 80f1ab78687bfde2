//! PowderBehavior - granular materials (sand, snow)
//!
//! Falls straight down, slides onto a lower diagonal, otherwise piles up.

use super::{Behavior, UpdateContext};

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let particle = ctx.particle();
        let xi = ctx.x as i32;
        let down = ctx.y as i32 - particle.velocity as i32;

        if ctx.open(xi, down) {
            ctx.commit(xi, down, particle);
        } else if ctx.open(xi - 1, down) {
            ctx.commit(xi - 1, down, particle);
        } else if ctx.open(xi + 1, down) {
            ctx.commit(xi + 1, down, particle);
        } else {
            ctx.stay(particle);
        }
    }
}
