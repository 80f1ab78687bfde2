//! SprayBehavior - water spray
//!
//! Falls straight down when it can; when blocked it drifts one random step,
//! preferring the lower diagonal over the same-row slot, which gives the
//! mist its scatter.

use super::{Behavior, UpdateContext};

pub struct SprayBehavior;

impl SprayBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for SprayBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let particle = ctx.particle();
        let xi = ctx.x as i32;
        let yi = ctx.y as i32;
        let down = yi - particle.velocity as i32;

        if ctx.open(xi, down) {
            ctx.commit(xi, down, particle);
        } else {
            let side = xi + ctx.rng.lateral();
            if ctx.open(side, down) {
                ctx.commit(side, down, particle);
            } else if ctx.open(side, yi) {
                ctx.commit(side, yi, particle);
            } else {
                ctx.stay(particle);
            }
        }
    }
}
