use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn size(&self) -> u32 { self.size }

    /// Total cell count (N * N)
    #[inline]
    pub fn len(&self) -> usize { self.cells.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(
            row < self.size && col < self.size,
            "index: out of bounds ({}, {}) for {}x{} grid",
            row,
            col,
            self.size,
            self.size
        );
        (row as usize) * (self.size as usize) + col as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let row = (idx as u32) / self.size;
        let col = (idx as u32) % self.size;
        (row, col)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && row < self.size as i64 && col >= 0 && col < self.size as i64
    }

    /// Neighbor lookup that treats anything off the board as dead.
    #[inline]
    pub fn is_live_at(&self, row: i64, col: i64) -> bool {
        self.in_bounds(row, col) && self.cells[self.index(row as u32, col as u32)].is_live()
    }
}
