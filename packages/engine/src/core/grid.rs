//! Grid - flat row-major N×N cell storage
//!
//! Stored as a single `Vec<Cell>` so the whole board is one contiguous
//! `Uint8Array` on the JS side (index = row * N + col).

use crate::domain::cell::Cell;

mod indexing;
mod ascii;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead N×N grid
    pub fn new(size: u32) -> Self {
        let len = (size as usize) * (size as usize);
        Self {
            size,
            cells: vec![Cell::Dead; len],
        }
    }

    /// Build from raw 0/1 bytes in row-major order.
    pub fn from_cells(size: u32, bytes: &[u8]) -> Result<Self, String> {
        let expected = (size as usize) * (size as usize);
        if bytes.len() != expected {
            return Err(format!(
                "expected {} cells for a {}x{} grid, got {}",
                expected,
                size,
                size,
                bytes.len()
            ));
        }

        let mut cells = Vec::with_capacity(expected);
        for (idx, &b) in bytes.iter().enumerate() {
            let cell = Cell::from_u8(b)
                .ok_or_else(|| format!("invalid cell value {} at index {}", b, idx))?;
            cells.push(cell);
        }

        Ok(Self { size, cells })
    }

    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Cell {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: u32, col: u32, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Flip a cell, returning its new state.
    #[inline]
    pub fn toggle(&mut self, row: u32, col: u32) -> Cell {
        let idx = self.index(row, col);
        let next = self.cells[idx].toggled();
        self.cells[idx] = next;
        next
    }

    /// Reset every cell to dead, keeping the allocation.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    pub fn live_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_live()).count() as u32
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact panics on 0; an empty grid has no rows anyway
        self.cells.chunks_exact(self.size.max(1) as usize)
    }

    /// Pointer to the cell bytes (for JS rendering)
    pub fn as_ptr(&self) -> *const u8 {
        self.cells.as_ptr() as *const u8
    }

    /// Copy of the cells as raw bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|&c| c as u8).collect()
    }
}
