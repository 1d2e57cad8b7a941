//! # Palette
//!
//! The four styles the board is drawn with. Colours are only used when the
//! terminal reports colour support and the config allows them; otherwise a
//! monochrome palette is used and drawing carries on unchanged.

use log::info;
use ratatui::style::{Color, Modifier, Style};

/// Minimum number of colours for the coloured palette.
const MIN_COLORS: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Status line and anything without a dedicated style
    pub default: Style,
    /// Piece glyphs
    pub piece: Style,
    /// Grid lines
    pub border: Style,
    /// Glyph of the selected cell
    pub selected: Style,
}

impl Palette {
    pub fn colored() -> Self {
        let base = Style::new().fg(Color::White).bg(Color::Black);
        Self {
            default: base,
            piece: base.add_modifier(Modifier::BOLD),
            border: base.add_modifier(Modifier::DIM),
            selected: base.add_modifier(Modifier::BOLD | Modifier::REVERSED),
        }
    }

    /// No colours. The selection still shows through reverse video.
    pub fn monochrome() -> Self {
        Self {
            default: Style::new(),
            piece: Style::new(),
            border: Style::new(),
            selected: Style::new().add_modifier(Modifier::REVERSED),
        }
    }

    /// Pick a palette for the current terminal.
    pub fn detect(colors_enabled: bool) -> Self {
        if !colors_enabled {
            info!("Colours disabled by config, using monochrome palette");
            return Self::monochrome();
        }
        Self::for_color_count(crossterm::style::available_color_count())
    }

    fn for_color_count(count: u16) -> Self {
        if count >= MIN_COLORS {
            info!("Terminal reports {count} colours, using coloured palette");
            Self::colored()
        } else {
            info!("Terminal reports {count} colours, using monochrome palette");
            Self::monochrome()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::monochrome()
    }
}
