use crate::grid::Grid;

const OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Live cells among the 8 surrounding positions.
///
/// Fixed boundary: positions outside [0, N) are absent, never wrapped.
#[inline]
pub fn live_neighbors(grid: &Grid, row: u32, col: u32) -> u8 {
    let (r, c) = (row as i64, col as i64);
    OFFSETS
        .iter()
        .filter(|&&(dr, dc)| grid.is_live_at(r + dr, c + dc))
        .count() as u8
}
