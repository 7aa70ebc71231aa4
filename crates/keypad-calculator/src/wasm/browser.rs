//! Browser WASM bindings for the calculator
//!
//! The page's own script forwards clicks and key presses here and copies the
//! two display strings back into its elements.

// Note: This module is already conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::config::EngineConfig;
use crate::core::CalculatorEngine;
use crate::keypad::{key_to_command, Keypad};

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    engine: CalculatorEngine,
    keypad: Keypad,
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            engine: CalculatorEngine::new(),
            keypad: Keypad::new(),
        }
    }

    /// Create a calculator from a JSON config string
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<BrowserCalculator, JsValue> {
        console_error_panic_hook::set_once();

        let config =
            EngineConfig::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            engine: CalculatorEngine::with_config(config),
            keypad: Keypad::new(),
        })
    }

    /// Handle a `keydown` event's `key`; returns true if it was used
    #[wasm_bindgen(js_name = pressKey)]
    pub fn press_key(&mut self, key: &str) -> bool {
        match key_to_command(key) {
            Some(command) => {
                self.engine.dispatch(command);
                true
            }
            None => false,
        }
    }

    /// Handle a click on the button with element id `id`
    #[wasm_bindgen(js_name = clickButton)]
    pub fn click_button(&mut self, id: &str) -> bool {
        let Some(command) = self.keypad.find_by_id(id).map(|btn| btn.command) else {
            console::warn_1(&format!("unknown calculator button: {id}").into());
            return false;
        };
        self.engine.dispatch(command);
        true
    }

    /// Text for the current-operand element
    #[wasm_bindgen(getter, js_name = currentDisplay)]
    pub fn current_display(&self) -> String {
        self.engine.current_display().to_string()
    }

    /// Text for the previous-operand element
    #[wasm_bindgen(getter, js_name = previousDisplay)]
    pub fn previous_display(&self) -> String {
        self.engine.previous_display().to_string()
    }

    /// Engine state as JSON, for debugging
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.engine.state()).unwrap_or_default()
    }
}
