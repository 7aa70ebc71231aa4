//! Commands accepted by the engine
//!
//! Every frontend translates its input events (button clicks, key presses)
//! into a [`Command`] and passes it to
//! [`CalculatorEngine::dispatch`](crate::core::CalculatorEngine::dispatch).

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, Operation};

/// A validated operand token: `'0'..='9'` or the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    /// The decimal point token
    pub const DECIMAL_POINT: Digit = Digit('.');

    /// Validates a token character
    pub fn new(token: char) -> CalcResult<Self> {
        if token.is_ascii_digit() || token == '.' {
            Ok(Self(token))
        } else {
            Err(CalcError::InvalidDigit(token))
        }
    }

    /// Creates a decimal digit from its value
    pub fn from_value(value: u8) -> CalcResult<Self> {
        char::from_digit(u32::from(value), 10)
            .map(Self)
            .ok_or(CalcError::InvalidDigit(char::REPLACEMENT_CHARACTER))
    }

    /// Returns the token character
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// True for the decimal point token
    #[must_use]
    pub const fn is_decimal_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(token: char) -> CalcResult<Self> {
        Self::new(token)
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single engine input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Append a digit or the decimal point to the current operand
    Digit(Digit),
    /// Queue a binary operation, evaluating any pending one first
    Operation(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Divide the current operand by 100
    Percent,
    /// Reset to the initial state
    Clear,
    /// Remove the last character of the current operand
    Delete,
}

impl Command {
    /// Builds a digit command from a token character
    pub fn digit(token: char) -> CalcResult<Self> {
        Digit::new(token).map(Self::Digit)
    }

    /// Short label used in logs and on the keypad
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operation(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Percent => "%".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }
}
