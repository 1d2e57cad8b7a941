use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields) and render to a
/// `Frame` within a given `Rect`. They never touch the board directly:
/// whatever they draw comes from their props.
pub trait Component {
    /// Render the component into the given area.
    ///
    /// Takes `&mut self` so a component may cache layout between frames.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
