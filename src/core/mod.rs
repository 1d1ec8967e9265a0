//! Core types: cells, board configuration, RNG.
//!
//! These are shared by the board, the knowledge base and the player.

pub mod cell;
pub mod config;
pub mod rng;

pub use cell::{Cell, Neighbors};
pub use config::BoardConfig;
pub use rng::GameRng;
