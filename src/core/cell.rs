//! Board coordinates.
//!
//! A `Cell` is a `(row, col)` pair, 0-indexed. Identity is by value, so two
//! cells with equal coordinates are the same cell everywhere they are used
//! as set keys.
//!
//! ## Usage
//!
//! ```
//! use minesweeper_ai::core::Cell;
//!
//! let corner = Cell::new(0, 0);
//! let neighbors = corner.neighbors(8, 8);
//!
//! // Corners only have three neighbors on the board
//! assert_eq!(neighbors.len(), 3);
//! assert!(neighbors.contains(&Cell::new(1, 1)));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Neighborhood of a cell. Never more than 8 entries, so it stays inline.
pub type Neighbors = SmallVec<[Cell; 8]>;

/// A board coordinate.
///
/// Ordering is row-major, which gives seeded runs a stable iteration order
/// whenever cells are sorted before a random choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// Row index (0-based, top to bottom).
    pub row: usize,
    /// Column index (0-based, left to right).
    pub col: usize,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this cell lies on a `height` x `width` board.
    #[must_use]
    pub const fn in_bounds(self, height: usize, width: usize) -> bool {
        self.row < height && self.col < width
    }

    /// The 8-connected neighborhood of this cell, clamped to the board.
    ///
    /// Excludes the cell itself. Cells are returned in row-major order.
    #[must_use]
    pub fn neighbors(self, height: usize, width: usize) -> Neighbors {
        let mut out = Neighbors::new();

        let row_end = (self.row + 2).min(height);
        let col_end = (self.col + 2).min(width);

        for row in self.row.saturating_sub(1)..row_end {
            for col in self.col.saturating_sub(1)..col_end {
                let cell = Cell::new(row, col);
                if cell != self {
                    out.push(cell);
                }
            }
        }

        out
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
