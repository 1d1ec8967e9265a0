//! Batches of independent games.
//!
//! Every game gets its own board, player and RNG stream forked from the
//! batch seed, so games share no state and a batch replays exactly.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BoardConfig, GameRng};
use crate::games::minesweeper::Board;
use crate::knowledge::InferenceStats;
use crate::player::{Player, PlayerConfig};
use crate::rules::GameOutcome;

use super::session::GameSession;

/// Aggregate results of a batch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Games played.
    pub games: u32,

    pub wins: u32,

    pub losses: u32,

    /// Games that ran out of moves without being won.
    pub exhausted: u32,

    /// Moves made without certainty, across all games.
    pub guesses: u32,

    /// Moves made in total, across all games.
    pub moves: u32,

    /// Inference counters summed over all games.
    pub inference: InferenceStats,
}

impl GameSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of games won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }

    /// Fold one finished game into the summary.
    pub fn record(&mut self, outcome: GameOutcome, moves: usize, player: &Player) {
        self.games += 1;
        match outcome {
            GameOutcome::Won => self.wins += 1,
            GameOutcome::Lost { .. } => self.losses += 1,
            GameOutcome::Exhausted => self.exhausted += 1,
        }
        self.moves += moves as u32;
        self.guesses += player.guesses();

        let stats = player.knowledge().stats();
        self.inference.observations += stats.observations;
        self.inference.passes += stats.passes;
        self.inference.sentences_derived += stats.sentences_derived;
        self.inference.safes_inferred += stats.safes_inferred;
        self.inference.mines_inferred += stats.mines_inferred;
    }
}

/// Play `count` independent games on freshly generated boards.
pub fn play_games(
    board: &BoardConfig,
    player: &PlayerConfig,
    count: u32,
    seed: u64,
) -> GameSummary {
    let mut rng = GameRng::new(seed);
    let mut summary = GameSummary::new();

    for game in 0..count {
        let game_rng = rng.fork();
        let mut board_rng = game_rng.for_context("board");
        let player_seed = game_rng.for_context("player").seed();

        let oracle = Board::new(*board, &mut board_rng);
        let ai = Player::new(board, player.clone().with_seed(player_seed));

        let mut session = GameSession::new(oracle, ai);
        let outcome = session.run();
        let moves = session.moves().len();
        debug!(game, ?outcome, moves, "finished game");

        let (_, ai) = session.into_parts();
        summary.record(outcome, moves, &ai);
    }

    summary
}
