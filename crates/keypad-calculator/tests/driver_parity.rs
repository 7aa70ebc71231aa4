//! Every frontend must show the same thing for the same key presses

#![allow(clippy::unwrap_used)]

use keypad_calculator::driver::{verify_all, CalculatorDriver, EngineDriver};
use keypad_calculator::wasm::WasmDriver;
use proptest::prelude::*;

#[cfg(feature = "tui")]
use keypad_calculator::driver::TuiDriver;

fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => "[0-9.+*/=%-]",
        1 => Just("Enter".to_string()),
        1 => Just("Escape".to_string()),
        1 => Just("Backspace".to_string()),
    ]
}

fn press_all<D: CalculatorDriver>(driver: &mut D, keys: &[String]) {
    for key in keys {
        driver.press_key(key);
    }
}

proptest! {
    #[test]
    fn prop_web_matches_engine(keys in prop::collection::vec(key_strategy(), 0..50)) {
        let mut engine = EngineDriver::new();
        let mut web = WasmDriver::new();
        press_all(&mut engine, &keys);
        press_all(&mut web, &keys);
        prop_assert_eq!(web.current_line(), engine.current_line());
        prop_assert_eq!(web.previous_line(), engine.previous_line());
        prop_assert_eq!(web.state(), engine.state());
    }

    #[cfg(feature = "tui")]
    #[test]
    fn prop_tui_matches_engine(keys in prop::collection::vec(key_strategy(), 0..50)) {
        let mut engine = EngineDriver::new();
        let mut tui = TuiDriver::new();
        press_all(&mut engine, &keys);
        press_all(&mut tui, &keys);
        prop_assert_eq!(tui.current_line(), engine.current_line());
        prop_assert_eq!(tui.state(), engine.state());
    }
}

#[test]
fn test_engine_driver_all_checks() {
    verify_all(&mut EngineDriver::new());
}

#[test]
fn test_wasm_driver_all_checks() {
    verify_all(&mut WasmDriver::new());
}

#[cfg(feature = "tui")]
#[test]
fn test_tui_driver_all_checks() {
    verify_all(&mut TuiDriver::new());
}
