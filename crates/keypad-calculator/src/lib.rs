//! Keypad Calculator
//!
//! A four-function calculator driven by keypad presses, the way a pocket
//! calculator or a web keypad works: digits build the current operand, an
//! operator parks it on the upper line, `=` evaluates left to right.
//!
//! One engine, two frontends:
//!
//! - **TUI** (`tui` feature): ratatui keypad with keyboard input
//! - **Web** (`wasm` feature): `wasm-bindgen` bindings, plus a mock DOM that
//!   runs the same page logic in native tests
//!
//! Both implement [`driver::CalculatorDriver`], so one set of behavioural
//! checks covers every frontend.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! for c in "1200".chars() {
//!     engine.dispatch(Command::digit(c).unwrap());
//! }
//! engine.dispatch(Command::Operation(Operation::Multiply));
//! engine.dispatch(Command::digit('3').unwrap());
//! engine.dispatch(Command::Equals);
//! assert_eq!(engine.current_display(), "3,600");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Web frontend - the mock DOM is always available for testing
pub mod wasm;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod logging;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{EngineConfig, ErrorRecovery};
    pub use crate::core::{
        CalcError, CalcResult, CalculatorEngine, Command, Digit, EngineState, Operation,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::keypad::{Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = CalculatorEngine::new();
        engine.dispatch(Command::digit('7').unwrap());
        assert_eq!(engine.current_display(), "7");
    }

    #[test]
    fn test_frontends_agree() {
        let keys = "1234.5*2=";
        let mut engine = EngineDriver::new();
        let mut web = WasmDriver::new();
        engine.type_keys(keys);
        web.type_keys(keys);
        assert_eq!(engine.current_line(), "2,469");
        assert_eq!(engine.current_line(), web.current_line());
        assert_eq!(engine.state(), web.state());
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_tui_agrees_with_engine() {
        let mut tui = TuiDriver::new();
        let mut engine = EngineDriver::new();
        tui.type_keys("9-12=");
        engine.type_keys("9-12=");
        assert_eq!(tui.current_line(), "-3");
        assert_eq!(tui.state(), engine.state());
    }

    #[test]
    fn test_config_flows_to_engine() {
        let config = EngineConfig::new().with_error_recovery(ErrorRecovery::LiteralAppend);
        let engine = CalculatorEngine::with_config(config.clone());
        assert_eq!(engine.config(), &config);
    }

    #[test]
    fn test_error_is_typed() {
        assert_eq!(Operation::Divide.apply(1.0, 0.0), Err(CalcError::DivisionByZero));
    }
}
