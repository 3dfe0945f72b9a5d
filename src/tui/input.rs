//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::AppState;

/// Player list rows moved by PgUp/PgDn.
const PAGE: isize = 10;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the dashboard.
    Quit,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Player list scrolling
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_players(1);
            KeyAction::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_players(-1);
            KeyAction::None
        }
        KeyCode::PageDown => {
            state.scroll_players(PAGE);
            KeyAction::None
        }
        KeyCode::PageUp => {
            state.scroll_players(-PAGE);
            KeyAction::None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.players_first();
            KeyAction::None
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.players_last();
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}
