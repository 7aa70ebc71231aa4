//! Calculator engine state machine
//!
//! Error prevention: all state lives in one struct and changes only through
//! the methods below; [`CalculatorEngine::dispatch`] is the entry point used
//! by frontends.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::{EngineConfig, ErrorRecovery};
use crate::core::format::{format_display_number_with, number_to_string, parse_operand};
use crate::core::{Command, Digit, Operation};

/// Current-operand text after a division by zero
pub const ERROR_SENTINEL: &str = "Error";

/// Snapshot of the engine's logical state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    /// Operand being typed or the last result
    pub current: String,
    /// Left operand of the pending operation, empty if none
    pub previous: String,
    /// Pending operation
    pub operation: Option<Operation>,
    /// Whether the next digit starts a fresh operand
    pub reset_pending: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            current: "0".to_string(),
            previous: String::new(),
            operation: None,
            reset_pending: false,
        }
    }
}

/// Two-operand, left-to-right calculator
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    current: String,
    previous: String,
    operation: Option<Operation>,
    reset_pending: bool,
    config: EngineConfig,
    current_display: String,
    previous_display: String,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine with custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let mut engine = Self {
            current: "0".to_string(),
            previous: String::new(),
            operation: None,
            reset_pending: false,
            config,
            current_display: String::new(),
            previous_display: String::new(),
        };
        engine.refresh_display();
        engine
    }

    /// Applies one command
    pub fn dispatch(&mut self, command: Command) {
        debug!(command = %command.label(), current = %self.current, "dispatch");
        match command {
            Command::Digit(digit) => self.append_digit(digit),
            Command::Operation(op) => self.choose_operation(op),
            Command::Equals => self.compute(),
            Command::Percent => self.calculate_percent(),
            Command::Clear => self.clear(),
            Command::Delete => self.delete_last_digit(),
        }
    }

    /// Appends a digit or decimal point to the current operand
    pub fn append_digit(&mut self, digit: Digit) {
        if self.reset_pending {
            self.current.clear();
            self.reset_pending = false;
        }

        if digit.is_decimal_point() && self.current.contains('.') {
            trace!("second decimal point ignored");
            return;
        }

        if self.current == "0" && !digit.is_decimal_point() {
            self.current = digit.to_string();
        } else {
            self.current.push(digit.as_char());
        }

        self.refresh_display();
    }

    /// Queues `operation`, evaluating a pending one first
    pub fn choose_operation(&mut self, operation: Operation) {
        if parse_operand(&self.current).is_none() {
            trace!(current = %self.current, "no operand to operate on");
            return;
        }

        if !self.previous.is_empty() {
            self.compute();
            if self.is_error() {
                return;
            }
        }

        self.operation = Some(operation);
        self.previous = std::mem::take(&mut self.current);
        self.refresh_display();
    }

    /// Evaluates the pending operation
    ///
    /// Does nothing when no operation is pending or either operand fails to
    /// parse. Division by zero puts the engine into the error state.
    pub fn compute(&mut self) {
        let Some(operation) = self.operation else {
            trace!("compute without pending operation");
            return;
        };
        let (Some(lhs), Some(rhs)) = (parse_operand(&self.previous), parse_operand(&self.current))
        else {
            trace!(previous = %self.previous, current = %self.current, "operand missing");
            return;
        };

        match operation.apply(lhs, rhs) {
            Ok(value) => {
                self.current = number_to_string(value);
                self.reset_pending = true;
                debug!(lhs, rhs, op = %operation, result = %self.current, "computed");
            }
            Err(err) => {
                warn!(lhs, %err, "calculation failed");
                self.current = ERROR_SENTINEL.to_string();
                self.reset_pending = self.config.error_recovery == ErrorRecovery::FreshEntry;
            }
        }

        self.previous.clear();
        self.operation = None;
        self.refresh_display();
    }

    /// Divides the current operand by 100
    pub fn calculate_percent(&mut self) {
        let Some(value) = parse_operand(&self.current) else {
            trace!(current = %self.current, "percent of non-number ignored");
            return;
        };
        self.current = number_to_string(value / 100.0);
        self.refresh_display();
    }

    /// Resets to `0` with nothing pending
    ///
    /// The reset flag is left alone: after `2 + 3 =`, `AC` then `.` starts a
    /// bare `"."` operand.
    pub fn clear(&mut self) {
        self.current = "0".to_string();
        self.previous.clear();
        self.operation = None;
        self.refresh_display();
    }

    /// Removes the last character, or clears after a result or error
    pub fn delete_last_digit(&mut self) {
        if self.is_error() || self.reset_pending {
            self.clear();
            return;
        }

        if self.current.chars().count() == 1 {
            self.current = "0".to_string();
        } else {
            self.current.pop();
        }
        self.refresh_display();
    }

    /// Text for the main display line
    #[must_use]
    pub fn current_display(&self) -> &str {
        &self.current_display
    }

    /// Text for the upper display line: `"<previous> <symbol>"` or empty
    #[must_use]
    pub fn previous_display(&self) -> &str {
        &self.previous_display
    }

    /// Raw current operand
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    /// Raw previous operand
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    /// Pending operation, if any
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operation> {
        self.operation
    }

    /// Whether the next digit starts a fresh operand
    #[must_use]
    pub fn is_reset_pending(&self) -> bool {
        self.reset_pending
    }

    /// Whether the engine is showing the division-by-zero error
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.current == ERROR_SENTINEL
    }

    /// Active configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Snapshot of the logical state
    #[must_use]
    pub fn state(&self) -> EngineState {
        EngineState {
            current: self.current.clone(),
            previous: self.previous.clone(),
            operation: self.operation,
            reset_pending: self.reset_pending,
        }
    }

    fn refresh_display(&mut self) {
        let separator = self.config.grouping_separator;

        self.current_display = if self.is_error() {
            self.current.clone()
        } else {
            format_display_number_with(&self.current, separator)
        };

        self.previous_display = match self.operation {
            Some(op) => format!(
                "{} {}",
                format_display_number_with(&self.previous, separator),
                op.symbol()
            ),
            None => String::new(),
        };
    }
}
