//! Guess policies: how to move when no cell is certainly safe.
//!
//! - `LowestDensity`: the cell with the lowest estimated mine probability
//! - `UniformGuess`: any unprobed, non-mine cell with equal probability

use crate::core::GameRng;
use crate::knowledge::{Guess, KnowledgeBase};

/// Policy for choosing a cell when logic alone cannot.
pub trait GuessPolicy: Send + Sync {
    /// Choose a cell to probe, or `None` if no cell is left.
    fn guess(&self, knowledge: &KnowledgeBase, total_mines: usize, rng: &mut GameRng)
        -> Option<Guess>;
}

/// Minimize the estimated mine probability.
///
/// Each candidate starts at the density of unfound mines over unexplored
/// cells and drops to the density of any sentence covering it.
#[derive(Clone, Debug, Default)]
pub struct LowestDensity;

impl GuessPolicy for LowestDensity {
    fn guess(
        &self,
        knowledge: &KnowledgeBase,
        total_mines: usize,
        rng: &mut GameRng,
    ) -> Option<Guess> {
        knowledge.best_guess(total_mines, rng)
    }
}

/// Ignore sentences and pick uniformly.
///
/// Baseline for measuring what the density estimate buys.
#[derive(Clone, Debug, Default)]
pub struct UniformGuess;

impl GuessPolicy for UniformGuess {
    fn guess(
        &self,
        knowledge: &KnowledgeBase,
        _total_mines: usize,
        rng: &mut GameRng,
    ) -> Option<Guess> {
        let candidates = knowledge.candidates();
        rng.choose(&candidates).map(|&cell| Guess {
            cell,
            probability: None,
        })
    }
}
