//! Propositional knowledge about a Minesweeper board.
//!
//! ## Overview
//!
//! Every revealed cell becomes a `Sentence`: "exactly `count` of these
//! neighboring cells are mines". The `KnowledgeBase` keeps those sentences
//! and repeatedly applies two kinds of reasoning until nothing changes:
//!
//! - **Resolution**: `{cells} = 0` means every cell is safe; `{cells} = |cells|`
//!   means every cell is a mine. Resolved cells are removed from all sentences.
//! - **Subset inference**: from `A ⊆ B`, the cells in `B` but not in `A` hold
//!   exactly `B.count - A.count` mines.
//!
//! ## Usage
//!
//! ```rust
//! use minesweeper_ai::core::{Cell, GameRng};
//! use minesweeper_ai::knowledge::KnowledgeBase;
//!
//! let mut kb = KnowledgeBase::new(3, 3);
//!
//! // The top-left corner has no mines around it
//! kb.add_knowledge(Cell::new(0, 0), 0);
//! assert!(kb.safes().contains(&Cell::new(1, 1)));
//!
//! // So there is a certain move to make next
//! let mut rng = GameRng::new(42);
//! assert!(kb.make_safe_move(&mut rng).is_some());
//! ```

pub mod base;
pub mod sentence;
pub mod stats;

pub use base::{Guess, KnowledgeBase};
pub use sentence::{MineRule, Sentence};
pub use stats::InferenceStats;
