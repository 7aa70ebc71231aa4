//! Property-based tests for the keypad and key mapping

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use keypad_calculator::core::{Command, Digit, Operation};
use keypad_calculator::keypad::{button_id, char_to_command, key_to_command, Keypad};
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = Digit> {
    prop_oneof![
        (0u8..=9u8).prop_map(|d| Digit::from_value(d).unwrap()),
        Just(Digit::DECIMAL_POINT),
    ]
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        digit_strategy().prop_map(Command::Digit),
        operation_strategy().prop_map(Command::Operation),
        Just(Command::Equals),
        Just(Command::Percent),
        Just(Command::Clear),
        Just(Command::Delete),
    ]
}

fn grid_position_strategy() -> impl Strategy<Value = (usize, usize)> {
    (0usize..5usize, 0usize..4usize)
}

// ===== Command properties =====

proptest! {
    #[test]
    fn prop_every_command_has_label(command in command_strategy()) {
        prop_assert!(!command.label().is_empty());
    }

    #[test]
    fn prop_every_command_has_one_button(command in command_strategy()) {
        let keypad = Keypad::new();
        let matches = keypad.buttons().iter().filter(|b| b.command == command).count();
        prop_assert_eq!(matches, 1);
    }

    #[test]
    fn prop_button_id_resolves_back(command in command_strategy()) {
        let keypad = Keypad::new();
        let btn = keypad.find_by_id(&button_id(command));
        prop_assert!(btn.is_some());
        prop_assert_eq!(btn.unwrap().command, command);
    }

    #[test]
    fn prop_digit_keys_map_to_digits(d in digit_strategy()) {
        let key = d.as_char().to_string();
        prop_assert_eq!(key_to_command(&key), Some(Command::Digit(d)));
    }

    #[test]
    fn prop_operation_symbols_map(op in operation_strategy()) {
        let symbol = op.symbol().chars().next().unwrap();
        prop_assert_eq!(char_to_command(symbol), Some(Command::Operation(op)));
    }

    #[test]
    fn prop_letters_unmapped(c in "[a-zA-Z]") {
        prop_assert_eq!(key_to_command(&c), None);
    }

    #[test]
    fn prop_multi_char_names_unmapped(name in "[A-Z][a-z]{2,8}") {
        prop_assume!(!matches!(name.as_str(), "Enter" | "Escape" | "Backspace"));
        prop_assert_eq!(key_to_command(&name), None);
    }
}

// ===== Grid properties =====

proptest! {
    #[test]
    fn prop_grid_position_matches_button(pos in grid_position_strategy()) {
        let keypad = Keypad::new();
        if let Some(btn) = keypad.button_at(pos.0, pos.1) {
            prop_assert_eq!((btn.row, btn.col), pos);
        }
    }

    #[test]
    fn prop_out_of_bounds_is_none(row in 5usize..50, col in 4usize..50) {
        let keypad = Keypad::new();
        prop_assert!(keypad.button_at(row, 0).is_none());
        prop_assert!(keypad.button_at(0, col).is_none());
    }
}

#[test]
fn test_button_ids_unique() {
    let keypad = Keypad::new();
    let ids: HashSet<_> = keypad.buttons().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids.len(), keypad.button_count());
}

#[test]
fn test_grid_covers_every_cell_but_one() {
    // The zero key's row has three buttons; everything else is full.
    let keypad = Keypad::new();
    let (rows, cols) = keypad.dimensions();
    let filled = (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .filter(|&(r, c)| keypad.button_at(r, c).is_some())
        .count();
    assert_eq!(filled, rows * cols - 1);
}
