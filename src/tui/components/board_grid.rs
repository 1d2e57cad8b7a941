//! # BoardGrid Component
//!
//! Draws the board as an ASCII grid and parks the terminal cursor on the
//! player's cursor cell.
//!
//! ```text
//!   +---+---+---+
//!   | R | N | B |      each cell is 4 columns wide ("| x "),
//!   +---+---+---+      each row is 2 lines tall (content + border)
//!   | P | P | P |
//!   +---+---+---+
//! ```
//!
//! The grid starts `MARGIN_X` columns and `MARGIN_Y` lines into the area.
//! The whole grid is redrawn every frame; ratatui diffs the buffer so only
//! changed cells reach the terminal.

use crate::core::board::{Board, Coordinate};
use crate::tui::component::Component;
use crate::tui::palette::Palette;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;

pub const MARGIN_X: u16 = 2;
pub const MARGIN_Y: u16 = 1;
/// Width of one cell, `"+---"`.
pub const CELL_WIDTH: u16 = 4;
/// Height of one row: a content line and a border line.
pub const ROW_HEIGHT: u16 = 2;

/// Left edge (`|`) of `column`, relative to the area origin.
fn column_x(column: usize) -> Option<u16> {
    u16::try_from(column)
        .ok()?
        .checked_mul(CELL_WIDTH)?
        .checked_add(MARGIN_X)
}

/// Content line of `row`, relative to the area origin.
fn row_y(row: usize) -> Option<u16> {
    u16::try_from(row)
        .ok()?
        .checked_mul(ROW_HEIGHT)?
        .checked_add(MARGIN_Y + 1)
}

/// Screen position of the glyph of `coord`, relative to the area origin.
///
/// `None` when the position does not fit in terminal coordinates.
pub fn screen_position(coord: Coordinate) -> Option<Position> {
    Some(Position::new(
        column_x(coord.column)?.checked_add(2)?,
        row_y(coord.row)?,
    ))
}

/// Lines used by a board `rows` tall, margin included. Saturates at
/// `u16::MAX`.
pub fn grid_height(rows: usize) -> u16 {
    row_y(rows).unwrap_or(u16::MAX)
}

/// Translate a position relative to `area` into an absolute one.
fn absolute(area: Rect, x: u16, y: u16) -> Option<(u16, u16)> {
    Some((area.x.checked_add(x)?, area.y.checked_add(y)?))
}

pub struct BoardGrid<'a> {
    pub board: &'a Board,
    pub palette: &'a Palette,
}

impl<'a> BoardGrid<'a> {
    pub fn new(board: &'a Board, palette: &'a Palette) -> Self {
        Self { board, palette }
    }
}

/// Write `text` at `(x, y)` if that point is inside `area`; the text is
/// clipped at the right edge.
fn put(buf: &mut Buffer, area: Rect, x: u16, y: u16, text: &str, style: Style) {
    if x < area.right() && y < area.bottom() {
        let max_width = (area.right() - x) as usize;
        buf.set_stringn(x, y, text, max_width, style);
    }
}

impl Component for BoardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let board = self.board;
        let palette = self.palette;
        let selection = board.selection();
        let Some((left, top)) = absolute(area, MARGIN_X, MARGIN_Y) else {
            return;
        };

        // Only columns starting inside the area are drawn
        let visible_columns = usize::from(area.right().saturating_sub(left))
            .div_ceil(usize::from(CELL_WIDTH))
            .min(board.width());
        let border_line = format!("{}+", "+---".repeat(visible_columns));

        let buf = frame.buffer_mut();
        put(buf, area, left, top, &border_line, palette.border);

        for row in 0..board.height() {
            let Some((_, y)) = row_y(row).and_then(|y| absolute(area, 0, y)) else {
                break;
            };
            if y >= area.bottom() {
                break;
            }
            for (column, cell) in board.row(row).iter().enumerate().take(visible_columns) {
                let Some((x, _)) = column_x(column).and_then(|x| absolute(area, x, 0)) else {
                    break;
                };
                let style = if selection == Some(Coordinate::new(column, row)) {
                    palette.selected
                } else {
                    palette.piece
                };
                put(buf, area, x, y, "|", palette.border);
                put(buf, area, x.saturating_add(1), y, &format!(" {} ", cell.glyph()), style);
            }
            if let Some((x, _)) = column_x(board.width()).and_then(|x| absolute(area, x, 0)) {
                put(buf, area, x, y, "|", palette.border);
            }
            if let Some(border_y) = y.checked_add(1) {
                put(buf, area, left, border_y, &border_line, palette.border);
            }
        }

        let cursor = screen_position(board.cursor())
            .and_then(|p| absolute(area, p.x, p.y))
            .map(|(x, y)| Position::new(x, y));
        if let Some(cursor) = cursor
            && area.contains(cursor)
        {
            frame.set_cursor_position(cursor);
        }
    }
}
