//! Classic Minesweeper board.
//!
//! A rectangular grid with a fixed number of hidden mines:
//! - Probing a mine loses the game
//! - Probing a safe cell reveals how many of its 8 neighbors are mines
//! - Flagging exactly the set of mines wins the game

mod board;

pub use board::Board;
