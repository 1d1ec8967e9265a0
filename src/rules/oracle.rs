//! Board oracle trait.
//!
//! The oracle is the ground truth of a game:
//! - Where the mines are
//! - How many mines surround a safe cell
//! - Whether the player has flagged every mine

use crate::core::Cell;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// Every mine was flagged, or every safe cell was revealed.
    Won,
    /// A mine was probed.
    Lost {
        /// The mine that ended the game.
        cell: Cell,
    },
    /// No move was left to make and the game was not won.
    Exhausted,
}

impl GameOutcome {
    /// Check if the game was won.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, GameOutcome::Won)
    }
}

/// Ground-truth board.
///
/// The player never sees this directly: the game loop queries it and feeds
/// the answers into the player's knowledge base.
///
/// ## Implementation Notes
///
/// - `nearby_mines`: Only meaningful for cells that are not mines
/// - `flag`: Repeated flags of the same cell must be harmless
/// - `won`: True iff the flagged set equals the true mine set
pub trait BoardOracle {
    /// Number of rows.
    fn height(&self) -> usize;

    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of mines on the board.
    fn mine_count(&self) -> usize;

    /// Check if a cell holds a mine.
    fn is_mine(&self, cell: Cell) -> bool;

    /// Count mines in the 8-neighborhood of a cell, bounds-checked.
    fn nearby_mines(&self, cell: Cell) -> usize;

    /// Record a cell as flagged by the player.
    fn flag(&mut self, cell: Cell);

    /// Record a safe cell as revealed.
    fn reveal(&mut self, cell: Cell);

    /// Check if every mine has been flagged.
    fn won(&self) -> bool;

    /// Check if every safe cell has been revealed.
    ///
    /// Oracles that do not track reveals can rely on `won` alone.
    fn cleared(&self) -> bool {
        false
    }
}
