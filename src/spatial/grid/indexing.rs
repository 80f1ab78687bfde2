use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.cols && y < self.rows,
            "index out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.cols,
            self.rows
        );
        (y * self.cols + x) as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx as u32) % self.cols;
        let y = (idx as u32) / self.cols;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.cols as i32 && y >= 0 && y < self.rows as i32
    }
}
