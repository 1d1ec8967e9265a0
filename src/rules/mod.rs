//! Board oracle contract.
//!
//! Boards implement `BoardOracle` to answer:
//! - Whether a cell is a mine
//! - How many mines neighbor a safe cell
//! - Whether the game has been won
//!
//! The player and the knowledge base never read the oracle directly;
//! only the game loop does.

pub mod oracle;

pub use oracle::{BoardOracle, GameOutcome};
