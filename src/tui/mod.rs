//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, draws the board, and
//! translates keyboard events into `core::InputKey` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loop
//!
//! ```text
//! draw board → block on read_key() → classify → Quit? stop : apply(board)
//! ```
//!
//! The loop has exactly one suspension point, the blocking key read. It ends
//! on `Quit` or when drawing fails; in both cases the terminal is restored
//! when the `TerminalSession` is dropped.
//!
//! A `SteadyBlock` cursor is used so the hardware cursor sitting on the
//! player's cell stays visible between redraws.

mod component;
pub mod components;
pub mod event;
pub mod palette;
pub mod ui;

use log::{debug, error, info};
use std::io::stdout;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::board::Board;
use crate::core::config::ResolvedConfig;
use crate::core::input::{self, InputKey};
use crate::tui::event::{classify, read_key};
use crate::tui::palette::Palette;
use crate::tui::ui::{ViewOptions, draw_ui};

/// Exclusive handle on the terminal.
///
/// Created by [`TerminalSession::startup`], which switches the terminal to
/// raw mode (no line buffering, no echo) on the alternate screen. Dropping
/// the session restores the terminal, so cleanup runs exactly once on every
/// exit path, early returns and panics included.
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    pub fn startup() -> std::io::Result<Self> {
        let terminal = match ratatui::try_init() {
            Ok(terminal) => terminal,
            Err(e) => {
                // Raw mode may already be on when the alternate screen failed
                ratatui::restore();
                return Err(e);
            }
        };
        // From here on Drop restores the terminal
        let session = Self { terminal };
        execute!(stdout(), Show, SetCursorStyle::SteadyBlock)?;
        info!("Terminal session started (raw mode, alternate screen)");
        Ok(session)
    }

    /// Redraw the whole board and park the cursor on the player's cell.
    pub fn render(&mut self, board: &Board, view: &ViewOptions) -> std::io::Result<()> {
        self.terminal.draw(|f| draw_ui(f, board, view))?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(stdout(), SetCursorStyle::DefaultUserShape);
        ratatui::restore();
        info!("Terminal session restored");
    }
}

/// Outcome of one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn handle_key(board: &mut Board, key: InputKey) -> Flow {
    if key == InputKey::Quit {
        return Flow::Quit;
    }
    if !input::apply(board, key) {
        debug!("Ignoring {key:?}");
    }
    Flow::Continue
}

/// Run the display loop until the user quits or the terminal fails.
///
/// Returns an error only when the terminal cannot be taken over; drawing and
/// reading errors inside the loop end the loop and are logged.
pub fn run(mut board: Board, config: &ResolvedConfig) -> std::io::Result<()> {
    let view = ViewOptions {
        palette: Palette::detect(config.colors),
        show_status: config.show_status,
    };

    let mut session = TerminalSession::startup()?;

    loop {
        if let Err(e) = session.render(&board, &view) {
            error!("Render failed, leaving display loop: {}", e);
            break;
        }

        let key_event = match read_key() {
            Ok(Some(key_event)) => key_event,
            Ok(None) => continue,
            Err(e) => {
                error!("Reading input failed, leaving display loop: {}", e);
                break;
            }
        };

        if handle_key(&mut board, classify(key_event)) == Flow::Quit {
            info!("Quit requested");
            break;
        }
    }

    drop(session);
    board.destroy();
    Ok(())
}
