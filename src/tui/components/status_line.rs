//! # StatusLine Component
//!
//! One line under the grid: where the cursor is, what is selected, and the
//! keys. Purely presentational, every value arrives as a prop.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

pub const KEY_HELP: &str = "[hjkl/arrows] move  [space/enter] select  [q] quit";

pub struct StatusLine {
    /// Cursor square in chess notation
    pub cursor: String,
    /// Selected square, `None` when nothing is selected
    pub selection: Option<String>,
    pub style: Style,
}

impl StatusLine {
    pub fn new(cursor: String, selection: Option<String>, style: Style) -> Self {
        Self {
            cursor,
            selection,
            style,
        }
    }

    pub fn text(&self) -> String {
        format!(
            "cursor: {}  selection: {}  {}",
            self.cursor,
            self.selection.as_deref().unwrap_or("-"),
            KEY_HELP
        )
    }
}

impl Component for StatusLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::styled(self.text(), self.style), area);
    }
}
