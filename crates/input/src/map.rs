//! Key mapping from terminal events to input events.

use crate::types::{Direction, InputEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to an input event.
///
/// Only the arrow keys and Ctrl-C are recognized; everything else yields
/// `None` and should be skipped by the caller.
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Up => Some(InputEvent::Move(Direction::Up)),
        KeyCode::Down => Some(InputEvent::Move(Direction::Down)),
        KeyCode::Left => Some(InputEvent::Move(Direction::Left)),
        KeyCode::Right => Some(InputEvent::Move(Direction::Right)),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
