//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::board::Board;

/// Creates an empty board of the given size.
pub fn empty_board(width: usize, height: usize) -> Board {
    Board::new(width, height).expect("test board allocation")
}

/// Creates an 8x8 board with the opening layout.
pub fn standard_board() -> Board {
    Board::standard().expect("test board allocation")
}
