//! Keyboard input handling
//!
//! Error prevention: key events become typed actions before they reach the app.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Command;
use crate::keypad::char_to_command;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send a command to the engine
    Command(Command),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char(c) => char_to_command(c).map_or(KeyAction::None, KeyAction::Command),
            KeyCode::Enter => KeyAction::Command(Command::Equals),
            KeyCode::Esc => KeyAction::Command(Command::Clear),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Command(Command::Delete),
            _ => KeyAction::None,
        }
    }
}
