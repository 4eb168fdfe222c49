//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Viewer keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextChart,
    PrevChart,
    /// Jump to the chart at this index.
    Select(usize),
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => KeyAction::NextChart,
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => KeyAction::PrevChart,
        KeyCode::Char(c @ '1'..='3') => KeyAction::Select(c as usize - '1' as usize),
        _ => KeyAction::None,
    }
}
