//! # minesweeper-ai
//!
//! A Minesweeper player that deduces safe cells and mines with
//! propositional logic over what the board has revealed.
//!
//! ## Design Principles
//!
//! 1. **Certainty First**: The player only guesses when no cell is proven
//!    safe. Guesses minimize an estimated mine probability.
//!
//! 2. **Fixed-Point Inference**: Every revealed cell is followed by inference
//!    run to completion, so queries never see half-updated knowledge.
//!
//! 3. **Deterministic**: Boards and players are seeded. The same seed
//!    replays the same game.
//!
//! ## Architecture
//!
//! - **Sentences**: `{cells} = count`, the number of mines among cells whose
//!   status is still unknown.
//!
//! - **Subset Inference**: From `A ⊆ B`, the cells `B - A` hold exactly
//!   `B.count - A.count` mines.
//!
//! - **Isolation**: One knowledge base per game, owned by the player. Games
//!   in a batch share nothing.
//!
//! ## Modules
//!
//! - `core`: Cells, board configuration, RNG
//! - `rules`: BoardOracle trait for ground-truth boards
//! - `games`: Board implementations
//! - `knowledge`: Sentences and the inference engine
//! - `player`: Move selection on top of the knowledge base
//! - `play`: Game loop and batch runner

pub mod core;
pub mod rules;
pub mod games;
pub mod knowledge;
pub mod player;
pub mod play;

// Re-export commonly used types
pub use crate::core::{BoardConfig, Cell, GameRng};

pub use crate::rules::{BoardOracle, GameOutcome};

pub use crate::games::minesweeper::Board;

pub use crate::knowledge::{Guess, InferenceStats, KnowledgeBase, MineRule, Sentence};

pub use crate::player::{
    GuessPolicy, LowestDensity, Move, MoveKind, Player, PlayerConfig, UniformGuess,
};

pub use crate::play::{play_games, GameSession, GameSummary, StepResult};
