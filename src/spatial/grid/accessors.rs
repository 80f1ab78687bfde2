use super::*;

impl Grid {
    // === Snapshot (active buffer) queries ===

    /// True iff (x, y) is empty in the active buffer. Requires coordinates
    /// in bounds; call sites guard with `in_bounds` (or use `is_open`).
    #[inline]
    pub fn is_empty(&self, x: u32, y: u32) -> bool {
        self.active.materials[self.index(x, y)] == MAT_EMPTY
    }

    /// Candidate test used by every movement rule: in bounds AND empty in
    /// the pre-move snapshot.
    #[inline]
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.is_empty(x as u32, y as u32)
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Particle {
        self.active.read(self.index(x, y))
    }

    /// Material at (x, y) in the active buffer; empty for out-of-range.
    #[inline]
    pub fn get_material(&self, x: i32, y: i32) -> MaterialId {
        if !self.in_bounds(x, y) {
            return MAT_EMPTY;
        }
        self.active.materials[self.index(x as u32, y as u32)]
    }

    // === Direct writes (brush and commands only) ===

    /// Overwrite a cell of the ACTIVE buffer. The brush bypasses the buffer
    /// discipline so a stamp is visible the same frame it is painted.
    #[inline]
    pub fn set_active(&mut self, x: u32, y: u32, particle: Particle) {
        let idx = self.index(x, y);
        self.active.write(idx, particle);
    }

    #[inline]
    pub fn clear_cell(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.active.write(idx, Particle::EMPTY);
    }

    // === Next-buffer commits ===

    /// Commit a particle into the next buffer. This is the only write path
    /// the movement rules have, and the only place the collision policy is
    /// consulted.
    pub fn commit(&mut self, src: (u32, u32), dst: (u32, u32), particle: Particle) {
        let di = self.index(dst.0, dst.1);
        match self.policy {
            CollisionPolicy::Overwrite => self.next.write(di, particle),
            CollisionPolicy::KeepFirst => {
                if self.next.materials[di] == MAT_EMPTY {
                    self.next.write(di, particle);
                } else {
                    let si = self.index(src.0, src.1);
                    if self.next.materials[si] == MAT_EMPTY {
                        self.next.write(si, particle);
                    }
                }
            }
        }
    }

    #[inline]
    pub fn get_next(&self, x: u32, y: u32) -> Particle {
        self.next.read(self.index(x, y))
    }

    // === Frame lifecycle ===

    /// Reset the next buffer to all-empty; called once before rule dispatch.
    pub fn clear_next(&mut self) {
        self.next.clear();
    }

    /// Exchange active and next. Ownership swap, no element copy.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.active, &mut self.next);
    }

    /// Empty both buffers.
    pub fn clear(&mut self) {
        self.active.clear();
        self.next.clear();
    }

    // === Render extraction ===

    /// Occupied cells of the active buffer as (col, row, material, hue).
    pub fn occupied(&self) -> impl Iterator<Item = (u32, u32, MaterialId, u16)> + '_ {
        let cols = self.cols;
        self.active
            .materials
            .iter()
            .enumerate()
            .filter_map(move |(idx, &material)| {
                if material == MAT_EMPTY {
                    None
                } else {
                    let x = (idx as u32) % cols;
                    let y = (idx as u32) / cols;
                    Some((x, y, material, self.active.hues[idx]))
                }
            })
    }

    pub fn occupied_count(&self) -> usize {
        self.active
            .materials
            .iter()
            .filter(|&&m| m != MAT_EMPTY)
            .count()
    }

    /// Get pointer to the active materials array (for JS rendering)
    pub fn materials_ptr(&self) -> *const MaterialId {
        self.active.materials.as_ptr()
    }

    /// Get pointer to the active hues array (for JS rendering)
    pub fn hues_ptr(&self) -> *const u16 {
        self.active.hues.as_ptr()
    }
}
