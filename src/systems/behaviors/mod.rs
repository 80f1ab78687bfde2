//! Behaviors - per-material movement rules
//!
//! One behavior per material category. A behavior reads the active buffer
//! (the pre-move snapshot), decides one destination per occupied cell, and
//! commits it into the next buffer. Every candidate is tested against the
//! snapshot, never the partially-filled destination, so in-frame ordering
//! shows up only as destination collisions resolved by the grid's
//! collision policy.

mod powder;
mod fluid;
mod fire;
mod spray;

pub use powder::PowderBehavior;
pub use fluid::FluidBehavior;
pub use fire::FireBehavior;
pub use spray::SprayBehavior;

use crate::core::random::RandomSource;
use crate::grid::{Grid, Particle};
use crate::materials::{CategoryId, CAT_FIRE, CAT_FLUID, CAT_POWDER, CAT_SPRAY};

/// Update context passed to behaviors.
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub x: u32,
    pub y: u32,
    pub frame: u64,
    pub rng: &'a mut dyn RandomSource,
}

impl<'a> UpdateContext<'a> {
    /// The particle being updated, from the pre-move snapshot.
    #[inline]
    pub fn particle(&self) -> Particle {
        self.grid.get(self.x, self.y)
    }

    /// Candidate test: in bounds and empty in the snapshot.
    #[inline]
    pub fn open(&self, nx: i32, ny: i32) -> bool {
        self.grid.is_open(nx, ny)
    }

    /// Commit the particle into the next buffer at (nx, ny). Callers have
    /// already checked `open`, so the cast is safe.
    #[inline]
    pub fn commit(&mut self, nx: i32, ny: i32, particle: Particle) {
        let src = (self.x, self.y);
        self.grid.commit(src, (nx as u32, ny as u32), particle);
    }

    /// Keep the particle at its current position.
    #[inline]
    pub fn stay(&mut self, particle: Particle) {
        let pos = (self.x, self.y);
        self.grid.commit(pos, pos, particle);
    }
}

/// Behavior trait - each category implements this.
pub trait Behavior {
    /// Hook run once before the per-cell pass; fire injects fresh particles
    /// here. Default is a no-op.
    fn begin_frame(&self, _grid: &mut Grid, _rng: &mut dyn RandomSource) {}

    /// Decide where the particle at (ctx.x, ctx.y) lands in the next buffer.
    fn update(&self, ctx: &mut UpdateContext);
}

/// Behavior registry - dispatch by category.
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    fluid: FluidBehavior,
    fire: FireBehavior,
    spray: SprayBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            fluid: FluidBehavior::new(),
            fire: FireBehavior::new(),
            spray: SprayBehavior::new(),
        }
    }

    /// Look up the behavior for a category. Empty has none.
    pub fn get(&self, category: CategoryId) -> Option<&dyn Behavior> {
        match category {
            CAT_POWDER => Some(&self.powder),
            CAT_FLUID => Some(&self.fluid),
            CAT_FIRE => Some(&self.fire),
            CAT_SPRAY => Some(&self.spray),
            _ => None,
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
