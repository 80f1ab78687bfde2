//! FireBehavior - rises, flickers sideways, dissipates when trapped
//!
//! Fire is the inverted material: it climbs against gravity and is the only
//! rule that creates and destroys particles. Every frame each column gets an
//! independent chance to ignite a fresh particle at the bottom row, and a
//! fully blocked particle occasionally burns out.

use super::{Behavior, UpdateContext};
use crate::core::random::RandomSource;
use crate::grid::{Grid, Particle};
use crate::materials::MAT_FIRE;

/// Per-column chance of a new bottom-row particle, percent.
const INJECT_CHANCE: u32 = 30;
/// Chance a fully blocked particle survives the frame, percent.
const KEEP_CHANCE: u32 = 95;
/// Intensity hue carried by injected particles.
const INJECT_HUE: u16 = 255;

pub struct FireBehavior;

impl FireBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for FireBehavior {
    fn begin_frame(&self, grid: &mut Grid, rng: &mut dyn RandomSource) {
        // Feed the fire: fresh particles at the bottom, one draw per column.
        for x in 0..grid.cols() {
            if rng.chance(INJECT_CHANCE) {
                grid.commit((x, 0), (x, 0), Particle::new(MAT_FIRE, INJECT_HUE));
            }
        }
    }

    fn update(&self, ctx: &mut UpdateContext) {
        let particle = ctx.particle();
        let xi = ctx.x as i32;
        let up = ctx.y as i32 + particle.velocity as i32;

        if ctx.open(xi, up) {
            ctx.commit(xi, up, particle);
        } else if ctx.open(xi - 1, up) {
            ctx.commit(xi - 1, up, particle);
        } else if ctx.open(xi + 1, up) {
            ctx.commit(xi + 1, up, particle);
        } else {
            let side = xi + ctx.rng.lateral();
            if ctx.open(side, up) {
                ctx.commit(side, up, particle);
            } else if ctx.rng.chance(KEEP_CHANCE) {
                ctx.stay(particle);
            }
            // else: trapped fire burns out; the destination stays empty.
        }
    }
}
