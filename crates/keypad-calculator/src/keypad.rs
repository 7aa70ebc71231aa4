//! Keypad layout and keyboard mapping shared by every frontend
//!
//! Visual feedback: one button grid, rendered by the TUI and the web page.
//!
//! Layout:
//! ```text
//! [AC ] [DEL] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ = ]
//! ```

use std::time::Duration;

use crate::core::{Command, Digit, Operation};

/// How long a pressed button stays highlighted
pub const PULSE_DURATION: Duration = Duration::from_millis(100);

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The command this button sends
    pub command: Command,
    /// Element id used by the web frontend
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a new button definition
    #[must_use]
    pub fn new(command: Command, row: usize, col: usize) -> Self {
        Self {
            id: button_id(command),
            command,
            row,
            col,
        }
    }

    /// Button face text
    #[must_use]
    pub fn label(&self) -> String {
        self.command.label()
    }
}

/// Element id for the button that sends `command`
#[must_use]
pub fn button_id(command: Command) -> String {
    match command {
        Command::Digit(d) if d.is_decimal_point() => "number-decimal".to_string(),
        Command::Digit(d) => format!("number-{d}"),
        Command::Operation(op) => format!("operation-{}", op.name()),
        Command::Equals => "equals".to_string(),
        Command::Percent => "percent".to_string(),
        Command::Clear => "clear".to_string(),
        Command::Delete => "delete".to_string(),
    }
}

/// Maps a keyboard key name to a command
///
/// Key names follow the browser `KeyboardEvent.key` convention
/// (`"Enter"`, `"Escape"`, `"Backspace"`, or the typed character).
#[must_use]
pub fn key_to_command(key: &str) -> Option<Command> {
    match key {
        "Enter" | "=" => Some(Command::Equals),
        "Escape" => Some(Command::Clear),
        "Backspace" => Some(Command::Delete),
        "%" => Some(Command::Percent),
        _ => {
            let mut chars = key.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            char_to_command(c)
        }
    }
}

/// Maps a typed character to a command
#[must_use]
pub fn char_to_command(c: char) -> Option<Command> {
    match c {
        '=' => Some(Command::Equals),
        '%' => Some(Command::Percent),
        '0'..='9' | '.' => Digit::new(c).ok().map(Command::Digit),
        _ => Operation::from_symbol(c).map(Command::Operation),
    }
}

/// Calculator keypad grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let digit = |c: char| Command::Digit(Digit::new(c).unwrap_or(Digit::DECIMAL_POINT));
        let layout: [&[Command]; 5] = [
            &[
                Command::Clear,
                Command::Delete,
                Command::Percent,
                Command::Operation(Operation::Divide),
            ],
            &[digit('7'), digit('8'), digit('9'), Command::Operation(Operation::Multiply)],
            &[digit('4'), digit('5'), digit('6'), Command::Operation(Operation::Subtract)],
            &[digit('1'), digit('2'), digit('3'), Command::Operation(Operation::Add)],
            &[digit('0'), Command::Digit(Digit::DECIMAL_POINT), Command::Equals],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, commands)| {
                commands
                    .iter()
                    .enumerate()
                    .map(move |(col, &command)| KeypadButton::new(command, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Buttons of one row
    pub fn row(&self, row: usize) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter().filter(move |b| b.row == row)
    }

    /// Button at a grid position
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Button by element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Button that sends `command`
    #[must_use]
    pub fn find_by_command(&self, command: Command) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.command == command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== key_to_command =====

    #[test]
    fn test_digit_keys() {
        for c in '0'..='9' {
            assert_eq!(
                key_to_command(&c.to_string()),
                Some(Command::digit(c).unwrap())
            );
        }
        assert_eq!(
            key_to_command("."),
            Some(Command::Digit(Digit::DECIMAL_POINT))
        );
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(key_to_command("+"), Some(Command::Operation(Operation::Add)));
        assert_eq!(
            key_to_command("-"),
            Some(Command::Operation(Operation::Subtract))
        );
        assert_eq!(
            key_to_command("*"),
            Some(Command::Operation(Operation::Multiply))
        );
        assert_eq!(
            key_to_command("/"),
            Some(Command::Operation(Operation::Divide))
        );
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(key_to_command("Enter"), Some(Command::Equals));
        assert_eq!(key_to_command("="), Some(Command::Equals));
        assert_eq!(key_to_command("Escape"), Some(Command::Clear));
        assert_eq!(key_to_command("Backspace"), Some(Command::Delete));
        assert_eq!(key_to_command("%"), Some(Command::Percent));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key_to_command("a"), None);
        assert_eq!(key_to_command("^"), None);
        assert_eq!(key_to_command(""), None);
        assert_eq!(key_to_command("Shift"), None);
        assert_eq!(key_to_command("12"), None);
    }

    // ===== button ids =====

    #[test]
    fn test_button_ids() {
        assert_eq!(button_id(Command::digit('4').unwrap()), "number-4");
        assert_eq!(button_id(Command::Digit(Digit::DECIMAL_POINT)), "number-decimal");
        assert_eq!(
            button_id(Command::Operation(Operation::Multiply)),
            "operation-multiply"
        );
        assert_eq!(button_id(Command::Equals), "equals");
        assert_eq!(button_id(Command::Clear), "clear");
        assert_eq!(button_id(Command::Delete), "delete");
        assert_eq!(button_id(Command::Percent), "percent");
    }

    // ===== Keypad =====

    #[test]
    fn test_keypad_layout() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 19);
        assert_eq!(keypad.dimensions(), (5, 4));
        assert_eq!(keypad.button_at(0, 0).unwrap().command, Command::Clear);
        assert_eq!(
            keypad.button_at(1, 3).unwrap().command,
            Command::Operation(Operation::Multiply)
        );
        assert_eq!(keypad.button_at(4, 2).unwrap().command, Command::Equals);
        assert!(keypad.button_at(4, 3).is_none());
        assert!(keypad.button_at(5, 0).is_none());
    }

    #[test]
    fn test_keypad_row() {
        let keypad = Keypad::new();
        let labels: Vec<String> = keypad.row(1).map(KeypadButton::label).collect();
        assert_eq!(labels, vec!["7", "8", "9", "×"]);
        assert_eq!(keypad.row(4).count(), 3);
    }

    #[test]
    fn test_keypad_covers_every_keyboard_command() {
        let keypad = Keypad::new();
        for key in [
            "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "*", "/", "Enter",
            "Escape", "Backspace", "%",
        ] {
            let command = key_to_command(key).unwrap();
            assert!(keypad.find_by_command(command).is_some(), "no button for {key}");
        }
    }

    #[test]
    fn test_find_by_id() {
        let keypad = Keypad::new();
        let btn = keypad.find_by_id("operation-divide").unwrap();
        assert_eq!(btn.label(), "÷");
        assert!(keypad.find_by_id("nope").is_none());
    }
}
