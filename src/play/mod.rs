//! Game loop: the player against the board.
//!
//! Each move follows the same cycle:
//!
//! 1. The player picks a cell (certain if possible, a guess otherwise)
//! 2. The oracle reveals whether it is a mine, or how many mines surround it
//! 3. The answer is fed back into the player's knowledge base
//! 4. Proven mines are flagged on the board
//!
//! The game ends when every mine is flagged or every safe cell revealed
//! (win), a mine is probed (loss), or no move is left.

pub mod batch;
pub mod session;

pub use batch::{play_games, GameSummary};
pub use session::{GameSession, StepResult};
