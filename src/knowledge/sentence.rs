//! Logical sentences about the board.
//!
//! A sentence asserts that exactly `count` of its `cells` are mines. Cells
//! leave a sentence as soon as their status is known, so the sentence only
//! ever talks about cells that are still uncertain.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// Rule deciding when a sentence proves all of its cells are mines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MineRule {
    /// All cells are mines iff there are exactly `count` of them.
    #[default]
    Exact,
    /// All cells are mines whenever `count` is nonzero.
    ///
    /// This was the player's original behavior, before `Exact` became the
    /// default.
    ///
    /// Over-asserts for sentences like `{A, B} = 1` and can drive counts
    /// negative.
    AnyNonZero,
}

impl MineRule {
    /// Check if a sentence with `len` cells and `count` mines is all mines.
    #[must_use]
    pub fn all_mines(self, len: usize, count: i64) -> bool {
        let exact = len as i64 == count;
        match self {
            MineRule::Exact => exact,
            MineRule::AnyNonZero => exact || count != 0,
        }
    }
}

/// `{cells} = count`: exactly `count` of `cells` are mines.
///
/// Two sentences are equal iff their cell sets and counts are equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
    cells: FxHashSet<Cell>,
    count: i64,
}

impl Sentence {
    /// Create a new sentence.
    pub fn new(cells: impl IntoIterator<Item = Cell>, count: i64) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            count,
        }
    }

    /// Cells whose status is still unknown.
    #[must_use]
    pub fn cells(&self) -> &FxHashSet<Cell> {
        &self.cells
    }

    /// Number of mines among `cells`.
    #[must_use]
    pub fn count(&self) -> i64 {
        self.count
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if this sentence mentions a cell.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Cells known to be mines, using the exact rule.
    #[must_use]
    pub fn known_mines(&self) -> FxHashSet<Cell> {
        self.known_mines_with(MineRule::Exact)
    }

    /// Cells known to be mines under the given rule.
    #[must_use]
    pub fn known_mines_with(&self, rule: MineRule) -> FxHashSet<Cell> {
        if rule.all_mines(self.cells.len(), self.count) {
            self.cells.clone()
        } else {
            FxHashSet::default()
        }
    }

    /// Cells known to be safe: all of them when `count` is zero.
    #[must_use]
    pub fn known_safes(&self) -> FxHashSet<Cell> {
        if self.count == 0 {
            self.cells.clone()
        } else {
            FxHashSet::default()
        }
    }

    /// Remove a cell now known to be a mine, accounting for it in `count`.
    ///
    /// No-op if the cell is not part of this sentence.
    pub fn mark_mine(&mut self, cell: Cell) {
        if self.cells.remove(&cell) {
            self.count -= 1;
        }
    }

    /// Remove a cell now known to be safe.
    ///
    /// No-op if the cell is not part of this sentence.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    /// Check if every cell of this sentence also appears in `other`.
    #[must_use]
    pub fn is_subset_of(&self, other: &Sentence) -> bool {
        self.cells.is_subset(&other.cells)
    }

    /// Subset inference: derive `(self - subset, self.count - subset.count)`.
    ///
    /// Returns `None` unless `subset`'s cells are contained in this sentence.
    #[must_use]
    pub fn subtract(&self, subset: &Sentence) -> Option<Sentence> {
        if !subset.is_subset_of(self) {
            return None;
        }

        Some(Sentence {
            cells: self.cells.difference(&subset.cells).copied().collect(),
            count: self.count - subset.count,
        })
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cells: Vec<_> = self.cells.iter().collect();
        cells.sort();

        f.write_str("{")?;
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "}} = {}", self.count)
    }
}
