use crate::core::board::{Board, Coordinate};
use crate::tui::component::Component;
use crate::tui::components::board_grid::{self, BoardGrid, MARGIN_X};
use crate::tui::components::StatusLine;
use crate::tui::palette::Palette;

use ratatui::Frame;
use ratatui::layout::Rect;

/// Presentation settings that stay fixed for the whole session.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    pub palette: Palette,
    pub show_status: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            show_status: true,
        }
    }
}

pub fn draw_ui(frame: &mut Frame, board: &Board, view: &ViewOptions) {
    let area = frame.area();
    BoardGrid::new(board, &view.palette).render(frame, area);

    if view.show_status
        && let Some(status_area) = status_area(area, board.height())
    {
        let mut status = StatusLine::new(
            square_name(board, board.cursor()),
            board.selection().map(|s| square_name(board, s)),
            view.palette.default,
        );
        status.render(frame, status_area);
    }
}

/// One line, leaving a blank line between the grid and the status.
fn status_area(area: Rect, rows: usize) -> Option<Rect> {
    let y = board_grid::grid_height(rows).saturating_add(1);
    if y >= area.height || MARGIN_X >= area.width {
        return None;
    }
    Some(Rect::new(
        area.x + MARGIN_X,
        area.y + y,
        area.width - MARGIN_X,
        1,
    ))
}

fn square_name(board: &Board, coord: Coordinate) -> String {
    coord
        .algebraic(board.height())
        .unwrap_or_else(|| coord.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::standard_board;
    use ratatui::Terminal;
    use ratatui::backend::{Backend, TestBackend};
    use ratatui::layout::Position;

    fn render(board: &Board, view: &ViewOptions, width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, board, view)).unwrap();
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_ui() {
        let mut board = standard_board();
        board.set_cursor(Coordinate::new(4, 6));
        board.toggle_selection();
        let mut terminal = render(&board, &ViewOptions::default(), 80, 24);

        let text = screen_text(&terminal);
        assert!(text.contains("| R | N | B | Q | K | B | N | R |"));
        assert!(text.contains("cursor: e2  selection: e2"));

        let position = terminal.backend_mut().get_cursor_position().unwrap();
        assert_eq!(position, Position::new(2 + 4 * 4 + 2, 1 + 2 * 6 + 1));
    }

    #[test]
    fn test_status_line_row() {
        let board = standard_board();
        let terminal = render(&board, &ViewOptions::default(), 80, 24);
        let buffer = terminal.backend().buffer();
        let row: String = (0..80).map(|x| buffer[(x, 19)].symbol()).collect();
        assert!(row.trim_start().starts_with("cursor: a8  selection: -"));
    }

    #[test]
    fn test_status_hidden_by_option() {
        let board = standard_board();
        let view = ViewOptions {
            show_status: false,
            ..Default::default()
        };
        let terminal = render(&board, &view, 80, 24);
        assert!(!screen_text(&terminal).contains("cursor:"));
    }

    #[test]
    fn test_status_skipped_when_terminal_too_short() {
        let board = standard_board();
        let terminal = render(&board, &ViewOptions::default(), 80, 19);
        assert!(!screen_text(&terminal).contains("cursor:"));
    }

    #[test]
    fn test_status_area_position() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(status_area(area, 8), Some(Rect::new(2, 19, 78, 1)));
        assert_eq!(status_area(Rect::new(0, 0, 80, 19), 8), None);
        assert_eq!(status_area(area, 100_000), None);
    }
}
