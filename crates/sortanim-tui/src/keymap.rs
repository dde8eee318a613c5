//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which screen is receiving keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The count prompt.
    #[default]
    Intro,
    /// The number grid.
    Sort,
}

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Start,
    Cancel,
    Reset,
    /// Submit the prompt, or pick the selected number.
    Select,
    Up,
    Down,
    Left,
    Right,
    /// A character typed into the prompt.
    Input(char),
    Backspace,
    None,
}

/// Map a key event to an action on `screen`.
///
/// The prompt takes every printable character as input, so only `Esc`
/// and `Ctrl+C` quit from it.
#[must_use]
pub fn map_key(screen: Screen, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    match screen {
        Screen::Intro => match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Enter => KeyAction::Select,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(c) => KeyAction::Input(c),
            _ => KeyAction::None,
        },
        Screen::Sort => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('s') => KeyAction::Start,
            KeyCode::Char('c') => KeyAction::Cancel,
            KeyCode::Char('r') => KeyAction::Reset,
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Select,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::Up,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::Down,
            KeyCode::Left | KeyCode::Char('h') => KeyAction::Left,
            KeyCode::Right | KeyCode::Char('l') => KeyAction::Right,
            _ => KeyAction::None,
        },
    }
}
