//! Cell state and the classic B3/S23 transition rule.

/// A single grid position.
///
/// `#[repr(u8)]` so the grid buffer can be viewed from JS as a `Uint8Array`
/// of 0/1 values without conversion.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Live = 1,
}

pub const CELL_DEAD: u8 = Cell::Dead as u8;
pub const CELL_LIVE: u8 = Cell::Live as u8;

impl Cell {
    /// Decode a raw byte. Anything other than 0/1 is rejected.
    #[inline]
    pub fn from_u8(value: u8) -> Option<Cell> {
        match value {
            CELL_DEAD => Some(Cell::Dead),
            CELL_LIVE => Some(Cell::Live),
            _ => None,
        }
    }

    #[inline]
    pub fn is_live(self) -> bool {
        self == Cell::Live
    }

    #[inline]
    pub fn toggled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Live,
            Cell::Live => Cell::Dead,
        }
    }

    /// Next state given the number of live neighbors (0..=8).
    ///
    /// Birth on exactly 3, survival on 2 or 3, death otherwise.
    #[inline]
    pub fn next(self, live_neighbors: u8) -> Cell {
        match (self, live_neighbors) {
            (Cell::Dead, 3) => Cell::Live,
            (Cell::Live, 2) | (Cell::Live, 3) => Cell::Live,
            _ => Cell::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_cell_is_born_only_on_three() {
        for n in 0..=8u8 {
            let expected = if n == 3 { Cell::Live } else { Cell::Dead };
            assert_eq!(Cell::Dead.next(n), expected, "neighbors={n}");
        }
    }

    #[test]
    fn live_cell_survives_on_two_or_three() {
        for n in 0..=8u8 {
            let expected = if n == 2 || n == 3 { Cell::Live } else { Cell::Dead };
            assert_eq!(Cell::Live.next(n), expected, "neighbors={n}");
        }
    }

    #[test]
    fn from_u8_rejects_garbage() {
        assert_eq!(Cell::from_u8(0), Some(Cell::Dead));
        assert_eq!(Cell::from_u8(1), Some(Cell::Live));
        assert_eq!(Cell::from_u8(2), None);
        assert_eq!(Cell::from_u8(255), None);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Cell::Dead.toggled(), Cell::Live);
        assert_eq!(Cell::Live.toggled().toggled(), Cell::Live);
    }
}
