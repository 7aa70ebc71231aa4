//! Web Frontend for Calculator
//!
//! The mock DOM and driver run everywhere; the `wasm-bindgen` entry point
//! is only built with the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom, CURRENT_OPERAND_ID, PREVIOUS_OPERAND_ID};
pub use driver::{WasmDriver, ACTIVE_CLASS};
