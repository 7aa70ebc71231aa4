//! Calculator core: operations, number formatting and the engine state machine
//!
//! Nothing in here knows about buttons, keys or terminals. Frontends build a
//! [`Command`] per input event, hand it to [`CalculatorEngine::dispatch`] and
//! read the two display lines back.

mod command;
mod engine;
pub mod format;
mod operations;

pub use command::{Command, Digit};
pub use engine::{CalculatorEngine, EngineState, ERROR_SENTINEL};
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// A character that is neither a decimal digit nor a decimal point
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),
    /// Configuration could not be parsed or failed validation
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CalcError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
