//! A single game: the player against a board oracle.

use tracing::{debug, trace};

use crate::player::{Move, Player};
use crate::rules::{BoardOracle, GameOutcome};

/// Result of advancing a game by one move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepResult {
    /// The move was safe and the game goes on.
    Continue(Move),
    /// The game is over.
    Finished(GameOutcome),
}

/// Drives one game to completion.
///
/// Each step asks the player for a move, checks it against the oracle,
/// feeds the revealed count back, and flags every mine the player has
/// proven so far.
pub struct GameSession<O: BoardOracle> {
    oracle: O,
    player: Player,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl<O: BoardOracle> GameSession<O> {
    /// Start a game.
    pub fn new(oracle: O, player: Player) -> Self {
        Self {
            oracle,
            player,
            moves: Vec::new(),
            outcome: None,
        }
    }

    #[must_use]
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Moves made so far, in order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The outcome, once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Play one move.
    ///
    /// Once the game has ended, keeps returning the same outcome.
    pub fn step(&mut self) -> StepResult {
        if let Some(outcome) = self.outcome {
            return StepResult::Finished(outcome);
        }

        if self.oracle.won() {
            return self.finish(GameOutcome::Won);
        }

        let Some(mv) = self.player.next_move() else {
            return self.finish(GameOutcome::Exhausted);
        };
        self.moves.push(mv);

        if self.oracle.is_mine(mv.cell) {
            return self.finish(GameOutcome::Lost { cell: mv.cell });
        }

        let count = self.oracle.nearby_mines(mv.cell);
        trace!(cell = %mv.cell, count, "revealed");
        self.oracle.reveal(mv.cell);
        self.player.observe(mv.cell, count);

        for &mine in self.player.knowledge().mines() {
            self.oracle.flag(mine);
        }

        if self.oracle.won() || self.oracle.cleared() {
            return self.finish(GameOutcome::Won);
        }

        StepResult::Continue(mv)
    }

    /// Play until the game ends.
    pub fn run(&mut self) -> GameOutcome {
        loop {
            if let StepResult::Finished(outcome) = self.step() {
                return outcome;
            }
        }
    }

    /// Consume the session, returning the oracle and player.
    pub fn into_parts(self) -> (O, Player) {
        (self.oracle, self.player)
    }

    fn finish(&mut self, outcome: GameOutcome) -> StepResult {
        debug!(?outcome, moves = self.moves.len(), "game over");
        self.outcome = Some(outcome);
        StepResult::Finished(outcome)
    }
}
