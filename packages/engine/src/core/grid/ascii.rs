//! Text form of a grid: `#` or `O` for live, `.` for dead, one row per line.

use std::fmt;

use super::*;

impl Grid {
    /// Parse a square ascii board. Blank lines and surrounding whitespace are ignored.
    pub fn from_ascii(text: &str) -> Result<Self, String> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (r, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != size {
                return Err(format!(
                    "row {} has {} cells, expected {} (grid must be square)",
                    r, width, size
                ));
            }
            for (c, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '#' | 'O' => Cell::Live,
                    '.' => Cell::Dead,
                    other => return Err(format!("unexpected '{}' at row {}, col {}", other, r, c)),
                };
                cells.push(cell);
            }
        }

        Ok(Self {
            size: size as u32,
            cells,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_live() { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
