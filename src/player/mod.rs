//! Automated Minesweeper player.
//!
//! ## Overview
//!
//! The player turns oracle answers into knowledge and knowledge into moves:
//!
//! - **Certain moves first**: any cell the knowledge base proved safe
//! - **Guesses otherwise**: chosen by a configurable `GuessPolicy`
//!   (lowest estimated mine density by default)
//!
//! ## Usage
//!
//! ```rust
//! use minesweeper_ai::core::BoardConfig;
//! use minesweeper_ai::player::{Player, PlayerConfig};
//!
//! let board = BoardConfig::default();
//! let mut player = Player::new(&board, PlayerConfig::default().with_seed(7));
//!
//! // Nothing is known yet, so the first move is a guess
//! let first = player.next_move().unwrap();
//! assert!(!first.is_safe());
//!
//! // Tell the player what the board revealed
//! player.observe(first.cell, 0);
//! assert!(player.next_move().unwrap().is_safe());
//! ```

pub mod ai;
pub mod config;
pub mod policy;

pub use ai::{Move, MoveKind, Player};
pub use config::PlayerConfig;
pub use policy::{GuessPolicy, LowestDensity, UniformGuess};
