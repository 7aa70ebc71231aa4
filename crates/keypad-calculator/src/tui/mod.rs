//! TUI Frontend for Calculator
//!
//! Visual feedback through a terminal interface

mod app;
mod input;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use ui::{render, CalculatorUI, KeypadWidget};
