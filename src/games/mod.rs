//! Board implementations.
//!
//! - `minesweeper`: the classic rectangular board with randomly placed mines

pub mod minesweeper;
