//! TUI Application State

use std::time::Instant;

use crossterm::event::KeyEvent;
use tracing::debug;

use crate::config::EngineConfig;
use crate::core::{CalculatorEngine, Command};
use crate::keypad::{Keypad, PULSE_DURATION};

use super::input::{InputHandler, KeyAction};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    engine: CalculatorEngine,
    keypad: Keypad,
    input: InputHandler,
    /// Last pressed button and when
    pressed: Option<(Command, Instant)>,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a calculator app with custom engine configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: CalculatorEngine::with_config(config),
            keypad: Keypad::new(),
            input: InputHandler::new(),
            pressed: None,
            should_quit: false,
        }
    }

    /// The calculator engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// The keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handles a key event; returns true if it changed anything
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        match self.input.handle_key(event) {
            KeyAction::Command(command) => {
                self.press_button(command);
                true
            }
            KeyAction::Quit => {
                debug!("quit requested");
                self.quit();
                true
            }
            KeyAction::None => false,
        }
    }

    /// Dispatches `command` and highlights its keypad button
    pub fn press_button(&mut self, command: Command) {
        self.engine.dispatch(command);
        self.pressed = Some((command, Instant::now()));
    }

    /// Button to highlight at `now`, if its pulse has not expired
    #[must_use]
    pub fn highlighted(&self, now: Instant) -> Option<Command> {
        self.pressed
            .filter(|(_, at)| now.saturating_duration_since(*at) < PULSE_DURATION)
            .map(|(command, _)| command)
    }
}
