//! # Input Keys
//!
//! Abstract keys the board understands, independent of the terminal backend.
//! The TUI translates raw key events into an `InputKey`; `apply()` then
//! updates the board.
//!
//! ```text
//! KeyEvent  →  classify()  →  InputKey  →  apply(board)  →  handled?
//! ```
//!
//! Select only marks or unmarks a cell. No piece is ever moved.

use log::debug;

use crate::core::board::Board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKey {
    #[default]
    Unknown,
    Quit,
    Up,
    Down,
    Left,
    Right,
    Select,
}

impl InputKey {
    /// Cursor delta for direction keys.
    fn delta(self) -> Option<(isize, isize)> {
        match self {
            InputKey::Up => Some((0, -1)),
            InputKey::Down => Some((0, 1)),
            InputKey::Left => Some((-1, 0)),
            InputKey::Right => Some((1, 0)),
            _ => None,
        }
    }
}

/// Apply a game key to the board.
///
/// Returns `false` for keys that are not game keys (`Quit`, `Unknown`); the
/// board is left untouched and the caller decides what to do with them.
pub fn apply(board: &mut Board, key: InputKey) -> bool {
    if let Some((dx, dy)) = key.delta() {
        let moved = board.move_cursor(dx, dy);
        debug!("{key:?}: cursor {} (moved: {moved})", board.cursor());
        return true;
    }

    match key {
        InputKey::Select => {
            board.toggle_selection();
            debug!("Select: selection {:?}", board.selection());
            true
        }
        _ => false,
    }
}
