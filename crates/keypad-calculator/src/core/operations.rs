//! Binary arithmetic operations
//!
//! Error prevention: the pending operation is a closed enum, never a raw symbol.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// One of the four keypad operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operations in keypad order (top to bottom)
    pub const ALL: [Operation; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol shown on the previous-operand line
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Name used in element ids
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Looks an operation up by its display symbol or its ASCII keyboard alias
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operation to `lhs` and `rhs`
    ///
    /// Only division can fail; overflow to infinity is an ordinary `f64` result.
    pub fn apply(&self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "×");
        assert_eq!(Operation::Divide.symbol(), "÷");
    }

    #[test]
    fn test_operation_display_matches_symbol() {
        for op in Operation::ALL {
            assert_eq!(op.to_string(), op.symbol());
        }
    }

    #[test]
    fn test_from_symbol_accepts_keyboard_aliases() {
        assert_eq!(Operation::from_symbol('*'), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol('/'), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol('×'), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol('÷'), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol('^'), None);
    }

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operation::Add.apply(3.0, 4.0), Ok(7.0));
        assert_eq!(Operation::Subtract.apply(3.0, 4.0), Ok(-1.0));
        assert_eq!(Operation::Multiply.apply(7.0, 2.0), Ok(14.0));
        assert_eq!(Operation::Divide.apply(7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn test_apply_divide_by_zero() {
        assert_eq!(
            Operation::Divide.apply(6.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            Operation::Divide.apply(6.0, -0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_apply_overflow_is_infinite() {
        let result = Operation::Multiply.apply(f64::MAX, 2.0).unwrap();
        assert!(result.is_infinite());
    }

    #[test]
    fn test_operation_serde() {
        let json = serde_json::to_string(&Operation::Divide).unwrap();
        assert_eq!(json, "\"Divide\"");
        let back: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Operation::Divide);
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            prop_assert_eq!(Operation::Add.apply(a, b), Operation::Add.apply(b, a));
        }

        #[test]
        fn prop_divide_nonzero_ok(a in -1e6f64..1e6, b in 1e-3f64..1e6) {
            prop_assert!(Operation::Divide.apply(a, b).is_ok());
        }
    }
}
