//! Board configuration.
//!
//! A board is fully described by its dimensions and mine total. The same
//! `BoardConfig` is handed to the board (to place mines) and to the player
//! (to bound neighborhoods and seed the probability baseline).

use serde::{Deserialize, Serialize};

use super::Cell;

/// Dimensions and mine total of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows.
    pub height: usize,

    /// Number of columns.
    pub width: usize,

    /// Number of mines hidden on the board.
    pub mine_count: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            height: 8,
            width: 8,
            mine_count: 8,
        }
    }
}

impl BoardConfig {
    /// Create a new board configuration.
    ///
    /// Panics if the board has no cells or if every cell would be a mine.
    pub fn new(height: usize, width: usize, mine_count: usize) -> Self {
        let config = Self {
            height,
            width,
            mine_count,
        };
        config.validate();
        config
    }

    /// Set the number of rows.
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the number of columns.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the number of mines.
    #[must_use]
    pub fn with_mine_count(mut self, mine_count: usize) -> Self {
        self.mine_count = mine_count;
        self
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.height * self.width
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Cell::new(row, col)))
    }

    /// Panic unless the board has cells and room for at least one safe cell.
    ///
    /// Builders do not check, so a chain may pass through invalid states.
    pub fn validate(&self) {
        assert!(self.height > 0 && self.width > 0, "Board must have at least 1 cell");
        assert!(
            self.mine_count < self.cell_count(),
            "Too many mines for the board size"
        );
    }
}
