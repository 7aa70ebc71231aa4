//! WASM Driver
//!
//! Turns DOM events into engine commands, writes both display lines back
//! into the page and pulses the pressed button's `active` class.
//!
//! Balanced testing: implements [`CalculatorDriver`] so the shared checks
//! run against the web frontend too.

use std::time::Instant;

use tracing::{debug, trace};

use super::dom::{DomEvent, MockDom, CURRENT_OPERAND_ID, PREVIOUS_OPERAND_ID};
use crate::config::EngineConfig;
use crate::core::{CalculatorEngine, Command, EngineState};
use crate::driver::CalculatorDriver;
use crate::keypad::{button_id, key_to_command, Keypad, PULSE_DURATION};

/// Class added to a button while its press pulse is running
pub const ACTIVE_CLASS: &str = "active";

/// WASM Driver wrapping the engine and the mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    engine: CalculatorEngine,
    keypad: Keypad,
    dom: MockDom,
    /// Buttons currently showing `active`, one entry per id, with the instant it expires
    pulses: Vec<(String, Instant)>,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a new WASM driver
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a WASM driver with custom engine configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let keypad = Keypad::new();
        let dom = MockDom::calculator(&keypad);
        let mut driver = Self {
            engine: CalculatorEngine::with_config(config),
            keypad,
            dom,
            pulses: Vec::new(),
        };
        driver.sync_dom();
        driver
    }

    /// Returns a reference to the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Handles one DOM event at `now`; returns true if it reached the engine
    pub fn handle_event(&mut self, event: DomEvent, now: Instant) -> bool {
        self.dom.record_event(event.clone());

        let command = match &event {
            DomEvent::Click { element_id } => self
                .keypad
                .find_by_id(element_id)
                .map(|btn| btn.command),
            DomEvent::KeyDown { key } => key_to_command(key),
        };

        let Some(command) = command else {
            trace!(?event, "event not mapped");
            return false;
        };

        debug!(?event, command = %command.label(), "dom event");
        self.engine.dispatch(command);
        self.sync_dom();
        self.pulse(&button_id(command), now);
        true
    }

    /// Clears `active` from buttons whose pulse has expired at `now`
    pub fn tick(&mut self, now: Instant) {
        let (expired, running): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pulses)
            .into_iter()
            .partition(|(_, until)| *until <= now);
        self.pulses = running;

        for (id, _) in expired {
            if let Some(elem) = self.dom.get_element_mut(&id) {
                elem.remove_class(ACTIVE_CLASS);
            }
        }
    }

    /// Whether a button currently carries the `active` class
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.dom
            .get_element(id)
            .is_some_and(|elem| elem.has_class(ACTIVE_CLASS))
    }

    /// Text of the current-operand element
    #[must_use]
    pub fn current_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(CURRENT_OPERAND_ID)
    }

    /// Text of the previous-operand element
    #[must_use]
    pub fn previous_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(PREVIOUS_OPERAND_ID)
    }

    fn pulse(&mut self, id: &str, now: Instant) {
        if let Some(elem) = self.dom.get_element_mut(id) {
            elem.add_class(ACTIVE_CLASS);
            self.pulses.retain(|(other, _)| other != id);
            self.pulses.push((id.to_string(), now + PULSE_DURATION));
        }
    }

    fn sync_dom(&mut self) {
        self.dom
            .set_element_text(CURRENT_OPERAND_ID, self.engine.current_display());
        self.dom
            .set_element_text(PREVIOUS_OPERAND_ID, self.engine.previous_display());
    }
}

impl CalculatorDriver for WasmDriver {
    fn press_key(&mut self, key: &str) -> bool {
        self.handle_event(DomEvent::key_down(key), Instant::now())
    }

    fn click(&mut self, command: Command) {
        self.handle_event(DomEvent::click(&button_id(command)), Instant::now());
    }

    fn current_line(&self) -> String {
        self.current_element_text().unwrap_or_default().to_string()
    }

    fn previous_line(&self) -> String {
        self.previous_element_text().unwrap_or_default().to_string()
    }

    fn state(&self) -> EngineState {
        self.engine.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::verify_all;
    use std::time::Duration;

    #[test]
    fn test_initial_page() {
        let driver = WasmDriver::new();
        assert_eq!(driver.current_element_text(), Some("0"));
        assert_eq!(driver.previous_element_text(), Some(""));
    }

    #[test]
    fn test_click_updates_display() {
        let mut driver = WasmDriver::new();
        let now = Instant::now();
        assert!(driver.handle_event(DomEvent::click("number-8"), now));
        assert!(driver.handle_event(DomEvent::click("operation-subtract"), now));
        assert_eq!(driver.previous_element_text(), Some("8 -"));
        assert_eq!(driver.current_element_text(), Some(""));
    }

    #[test]
    fn test_keydown_updates_display() {
        let mut driver = WasmDriver::new();
        let now = Instant::now();
        for key in ["9", "/", "3", "Enter"] {
            driver.handle_event(DomEvent::key_down(key), now);
        }
        assert_eq!(driver.current_element_text(), Some("3"));
    }

    #[test]
    fn test_unmapped_events_ignored() {
        let mut driver = WasmDriver::new();
        let now = Instant::now();
        assert!(!driver.handle_event(DomEvent::click("current-operand"), now));
        assert!(!driver.handle_event(DomEvent::key_down("Shift"), now));
        assert_eq!(driver.dom().event_history().len(), 2);
        assert_eq!(driver.current_element_text(), Some("0"));
    }

    #[test]
    fn test_button_pulse_expires() {
        let mut driver = WasmDriver::new();
        let now = Instant::now();
        driver.handle_event(DomEvent::click("percent"), now);
        assert!(driver.is_active("percent"));

        driver.tick(now + Duration::from_millis(50));
        assert!(driver.is_active("percent"));

        driver.tick(now + PULSE_DURATION);
        assert!(!driver.is_active("percent"));
    }

    #[test]
    fn test_keyboard_pulses_matching_button() {
        let mut driver = WasmDriver::new();
        let now = Instant::now();
        driver.handle_event(DomEvent::key_down("*"), now);
        assert!(driver.is_active("operation-multiply"));
        driver.handle_event(DomEvent::key_down("Escape"), now);
        assert!(driver.is_active("clear"));
    }

    #[test]
    fn test_repeated_press_extends_pulse() {
        let mut driver = WasmDriver::new();
        let now = Instant::now();
        driver.handle_event(DomEvent::click("number-1"), now);
        driver.handle_event(DomEvent::click("number-1"), now + Duration::from_millis(80));
        driver.tick(now + PULSE_DURATION);
        assert!(driver.is_active("number-1"));
        driver.tick(now + Duration::from_millis(180));
        assert!(!driver.is_active("number-1"));
    }

    #[test]
    fn test_pulses_bounded_without_tick() {
        let mut driver = WasmDriver::new();
        for _ in 0..1000 {
            driver.press_key("5");
        }
        driver.press_key("+");
        assert_eq!(driver.pulses.len(), 2);
        assert!(driver.is_active("number-5"));
        assert!(driver.is_active("operation-add"));
    }

    #[test]
    fn test_error_shown_in_page() {
        let mut driver = WasmDriver::new();
        driver.type_keys("5/0=");
        assert_eq!(driver.current_element_text(), Some("Error"));
        assert!(driver.engine().is_error());
    }

    #[test]
    fn test_with_config() {
        let config = EngineConfig::new().with_grouping_separator(' ');
        let mut driver = WasmDriver::with_config(config);
        driver.type_keys("98765");
        assert_eq!(driver.current_line(), "98 765");
    }

    #[test]
    fn test_wasm_driver_all_checks() {
        let mut driver = WasmDriver::new();
        verify_all(&mut driver);
    }
}
