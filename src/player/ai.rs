//! The automated player.
//!
//! Owns a knowledge base for one game and picks moves from it: a proven
//! safe cell whenever one exists, otherwise a guess from its policy.

use tracing::debug;

use crate::core::{BoardConfig, Cell, GameRng};
use crate::knowledge::KnowledgeBase;

use super::config::PlayerConfig;
use super::policy::{GuessPolicy, LowestDensity};

/// How a move was chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveKind {
    /// The cell is proven safe.
    Safe,
    /// No safe cell was known.
    Guess {
        /// Estimated mine probability, `None` for an uninformed guess.
        probability: Option<f64>,
    },
}

/// A cell to probe and why it was chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Move {
    pub cell: Cell,
    pub kind: MoveKind,
}

impl Move {
    /// Check if this move is logically certain.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        matches!(self.kind, MoveKind::Safe)
    }
}

/// Minesweeper player for a single game.
pub struct Player {
    config: PlayerConfig,

    /// Mines on the board, for the probability baseline.
    total_mines: usize,

    knowledge: KnowledgeBase,

    /// RNG for choosing among safe moves and for guesses.
    rng: GameRng,

    guess_policy: Box<dyn GuessPolicy>,

    /// Guesses made so far.
    guesses: u32,
}

impl Player {
    /// Create a player for a board.
    pub fn new(board: &BoardConfig, config: PlayerConfig) -> Self {
        let knowledge = KnowledgeBase::new(board.height, board.width).with_mine_rule(config.mine_rule);
        let rng = GameRng::new(config.seed);

        Self {
            config,
            total_mines: board.mine_count,
            knowledge,
            rng,
            guess_policy: Box::new(LowestDensity),
            guesses: 0,
        }
    }

    /// Set a custom guess policy.
    pub fn with_guess_policy<G: GuessPolicy + 'static>(mut self, policy: G) -> Self {
        self.guess_policy = Box::new(policy);
        self
    }

    /// Get the player configuration.
    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Read-only view of what the player knows.
    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Number of guesses made so far.
    #[must_use]
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    /// Choose the next cell to probe.
    ///
    /// Returns `None` when every cell is probed or known to be a mine.
    pub fn next_move(&mut self) -> Option<Move> {
        if let Some(cell) = self.knowledge.make_safe_move(&mut self.rng) {
            return Some(Move {
                cell,
                kind: MoveKind::Safe,
            });
        }

        let guess = self
            .guess_policy
            .guess(&self.knowledge, self.total_mines, &mut self.rng)?;
        self.guesses += 1;
        debug!(cell = %guess.cell, probability = ?guess.probability, "guessing");

        Some(Move {
            cell: guess.cell,
            kind: MoveKind::Guess {
                probability: guess.probability,
            },
        })
    }

    /// Feed a revealed cell and its neighbor mine count into the knowledge base.
    pub fn observe(&mut self, cell: Cell, count: usize) {
        self.knowledge.add_knowledge(cell, count);
    }
}
