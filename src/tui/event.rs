use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use crate::core::input::InputKey;

/// Block until the terminal reports an event.
///
/// Returns `None` for events that are not key presses (resize, focus,
/// mouse). The caller redraws on every loop turn, so a resize is picked up
/// without special handling.
pub fn read_key() -> std::io::Result<Option<KeyEvent>> {
    match event::read()? {
        Event::Key(key_event) => {
            debug!(
                "Key event: {:?} with modifiers {:?} ({:?})",
                key_event.code, key_event.modifiers, key_event.kind
            );
            Ok(Some(key_event))
        }
        other => {
            debug!("Ignoring non-key event: {:?}", other);
            Ok(None)
        }
    }
}

/// Translate a raw key event into an `InputKey`.
///
/// Letters are matched case-insensitively. Unrecognized keys map to
/// `InputKey::Unknown` and are inert.
pub fn classify(key_event: KeyEvent) -> InputKey {
    // Kitty keyboard protocol also reports releases; only presses count
    if key_event.kind == KeyEventKind::Release {
        return InputKey::Unknown;
    }

    // Alt chords are never game keys
    if key_event.modifiers.contains(KeyModifiers::ALT) {
        return InputKey::Unknown;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            // Ctrl+C arrives as a plain key in raw mode
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'c') => InputKey::Quit,
            _ => InputKey::Unknown,
        };
    }

    match key_event.code {
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Enter => InputKey::Select,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => InputKey::Quit,
            'k' => InputKey::Up,
            'j' => InputKey::Down,
            'h' => InputKey::Left,
            'l' => InputKey::Right,
            ' ' => InputKey::Select,
            _ => InputKey::Unknown,
        },
        _ => InputKey::Unknown,
    }
}
