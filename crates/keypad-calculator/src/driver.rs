//! Unified Calculator Driver
//!
//! Write the behavioural checks once, run them against every frontend.
//!
//! Balanced testing: the TUI and the web frontend share the `verify_*`
//! functions below.

use crate::core::{Command, EngineState};
use crate::keypad::{char_to_command, key_to_command};

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust,ignore
/// fn check<D: CalculatorDriver>(driver: &mut D) {
///     driver.type_keys("3+4*2=");
///     assert_eq!(driver.current_line(), "14");
/// }
/// ```
pub trait CalculatorDriver {
    /// Presses a keyboard key (browser key name); returns false if unmapped
    fn press_key(&mut self, key: &str) -> bool;

    /// Clicks the keypad button that sends `command`
    fn click(&mut self, command: Command);

    /// Text of the main display line
    fn current_line(&self) -> String;

    /// Text of the upper display line
    fn previous_line(&self) -> String;

    /// Engine state snapshot
    fn state(&self) -> EngineState;

    /// Types each character of `keys` as a key press
    fn type_keys(&mut self, keys: &str) {
        for c in keys.chars() {
            self.press_key(c.encode_utf8(&mut [0; 4]));
        }
    }
}

/// Maps every character of `keys` to a command, stopping at the first unmapped one
pub fn parse_keys(keys: &str) -> Result<Vec<Command>, char> {
    keys.chars()
        .map(|c| key_to_command(c.encode_utf8(&mut [0; 4])).ok_or(c))
        .collect()
}

// ===== Unified Test Specifications =====
// These checks work with ANY CalculatorDriver implementation

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (keys, expected) in [("2+3=", "5"), ("10-4=", "6"), ("6*7=", "42"), ("20/8=", "2.5")] {
        driver.press_key("Escape");
        driver.type_keys(keys);
        assert_eq!(driver.current_line(), expected, "keys {keys}");
        assert_eq!(driver.previous_line(), "");
    }
    driver.press_key("Escape");
}

/// Verifies strict left-to-right chaining
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.press_key("Escape");
    driver.type_keys("3+4*");
    assert_eq!(driver.previous_line(), "7 ×");
    assert_eq!(driver.current_line(), "");
    driver.type_keys("2=");
    assert_eq!(driver.current_line(), "14");
    driver.press_key("Escape");
}

/// Asserts both operands and the pending operation are reset
fn assert_cleared<D: CalculatorDriver>(driver: &D) {
    let state = driver.state();
    assert_eq!(state.current, "0");
    assert_eq!(state.previous, "");
    assert_eq!(state.operation, None);
    assert_eq!(driver.current_line(), "0");
    assert_eq!(driver.previous_line(), "");
}

/// Verifies the division-by-zero error state and recovery
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.press_key("Escape");
    driver.type_keys("6/0");
    driver.press_key("Enter");
    assert_eq!(driver.current_line(), "Error");
    assert_eq!(driver.previous_line(), "");
    let state = driver.state();
    assert_eq!(state.previous, "");
    assert_eq!(state.operation, None);

    driver.press_key("Backspace");
    assert_cleared(driver);
}

/// Verifies percent, delete and clear
pub fn verify_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.press_key("Escape");
    driver.type_keys("50%");
    assert_eq!(driver.current_line(), "0.5");

    driver.press_key("Escape");
    driver.type_keys("123");
    driver.press_key("Backspace");
    assert_eq!(driver.current_line(), "12");
    driver.press_key("Backspace");
    driver.press_key("Backspace");
    assert_eq!(driver.current_line(), "0");

    driver.type_keys("9+");
    driver.press_key("Escape");
    assert_cleared(driver);
}

/// Verifies thousands grouping on both display lines
pub fn verify_display_grouping<D: CalculatorDriver>(driver: &mut D) {
    driver.press_key("Escape");
    driver.type_keys("1234567.890");
    assert_eq!(driver.current_line(), "1,234,567.890");
    driver.type_keys("+");
    assert_eq!(driver.previous_line(), "1,234,567.890 +");
    driver.press_key("Escape");
}

/// Verifies keypad clicks and key presses reach the same state
pub fn verify_buttons_match_keys<D: CalculatorDriver>(driver: &mut D) {
    driver.press_key("Escape");
    for command in "12.5*4=".chars().filter_map(char_to_command) {
        driver.click(command);
    }
    let clicked = (driver.current_line(), driver.state());

    driver.press_key("Escape");
    driver.type_keys("12.5*4=");
    assert_eq!((driver.current_line(), driver.state()), clicked);
    assert_eq!(driver.current_line(), "50");
    driver.press_key("Escape");
}

/// Runs every check
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chaining(driver);
    verify_division_by_zero(driver);
    verify_editing(driver);
    verify_display_grouping(driver);
    verify_buttons_match_keys(driver);
}

/// Driver over a bare engine, no frontend
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: crate::core::CalculatorEngine,
}

impl EngineDriver {
    /// Creates a driver over a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver over an existing engine
    #[must_use]
    pub fn with_engine(engine: crate::core::CalculatorEngine) -> Self {
        Self { engine }
    }

    /// The wrapped engine
    #[must_use]
    pub fn engine(&self) -> &crate::core::CalculatorEngine {
        &self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press_key(&mut self, key: &str) -> bool {
        match key_to_command(key) {
            Some(command) => {
                self.engine.dispatch(command);
                true
            }
            None => false,
        }
    }

    fn click(&mut self, command: Command) {
        self.engine.dispatch(command);
    }

    fn current_line(&self) -> String {
        self.engine.current_display().to_string()
    }

    fn previous_line(&self) -> String {
        self.engine.previous_display().to_string()
    }

    fn state(&self) -> EngineState {
        self.engine.state()
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::CalculatorDriver;
    use crate::core::{Command, EngineState};
    use crate::tui::CalculatorApp;

    /// TUI-specific driver wrapping the calculator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    /// Converts a browser key name into a crossterm key event
    fn key_event(key: &str) -> Option<KeyEvent> {
        let code = match key {
            "Enter" => KeyCode::Enter,
            "Escape" => KeyCode::Esc,
            "Backspace" => KeyCode::Backspace,
            _ => {
                let mut chars = key.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                KeyCode::Char(c)
            }
        };
        Some(KeyEvent::new(code, KeyModifiers::NONE))
    }

    impl CalculatorDriver for TuiDriver {
        fn press_key(&mut self, key: &str) -> bool {
            key_event(key).is_some_and(|event| self.app.handle_key(event))
        }

        fn click(&mut self, command: Command) {
            self.app.press_button(command);
        }

        fn current_line(&self) -> String {
            self.app.engine().current_display().to_string()
        }

        fn previous_line(&self) -> String {
            self.app.engine().previous_display().to_string()
        }

        fn state(&self) -> EngineState {
            self.app.engine().state()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;
