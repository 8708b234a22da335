//! Operations and the checked decimal arithmetic that applies them.
//!
//! An [`Operation`] is an immutable (kind, operand) record. Applying one to a
//! value never consults prior state, which is what makes full history replay
//! a plain fold.

use crate::accumulator::errors::AccumulatorError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Number of fractional digits a division result is rounded to.
pub const DIVISION_SCALE: u32 = 6;

/// Provenance tag recorded on history entries produced by redo.
pub const REDO_NOTE: &str = "REDO";

/// The four supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperationKind {
    /// Operator symbol, used by the history tape and input echo.
    pub fn symbol(self) -> char {
        match self {
            OperationKind::Add => '+',
            OperationKind::Subtract => '-',
            OperationKind::Multiply => '*',
            OperationKind::Divide => '/',
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Add => "ADD",
            OperationKind::Subtract => "SUBTRACT",
            OperationKind::Multiply => "MULTIPLY",
            OperationKind::Divide => "DIVIDE",
        };
        write!(f, "{}", name)
    }
}

/// An immutable record of one applied operation.
///
/// The same operation value moves between the history log and the undo/redo
/// stacks by cloning; nothing ever mutates it after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub kind: OperationKind,
    pub operand: Decimal,
    /// Optional provenance tag. The only tag in use is [`REDO_NOTE`], marking
    /// entries appended by redo rather than by a fresh apply.
    pub note: Option<String>,
}

impl Operation {
    pub fn new(kind: OperationKind, operand: Decimal) -> Self {
        Operation {
            kind,
            operand,
            note: None,
        }
    }

    pub fn with_note(kind: OperationKind, operand: Decimal, note: &str) -> Self {
        Operation {
            kind,
            operand,
            note: Some(note.to_string()),
        }
    }

    /// Apply this operation to `value` and return the result.
    ///
    /// All arithmetic is checked: a zero divisor fails with
    /// [`AccumulatorError::DivideByZero`] and a result outside `Decimal`
    /// range fails with [`AccumulatorError::Overflow`]. The input value is
    /// untouched on failure.
    pub fn apply_to(&self, value: Decimal) -> Result<Decimal, AccumulatorError> {
        match self.kind {
            OperationKind::Add => {
                value
                    .checked_add(self.operand)
                    .ok_or_else(|| AccumulatorError::Overflow {
                        operation: format!("{} + {}", value, self.operand),
                    })
            }
            OperationKind::Subtract => {
                value
                    .checked_sub(self.operand)
                    .ok_or_else(|| AccumulatorError::Overflow {
                        operation: format!("{} - {}", value, self.operand),
                    })
            }
            OperationKind::Multiply => {
                value
                    .checked_mul(self.operand)
                    .ok_or_else(|| AccumulatorError::Overflow {
                        operation: format!("{} * {}", value, self.operand),
                    })
            }
            OperationKind::Divide => {
                if self.operand.is_zero() {
                    return Err(AccumulatorError::DivideByZero);
                }
                let quotient =
                    value
                        .checked_div(self.operand)
                        .ok_or_else(|| AccumulatorError::Overflow {
                            operation: format!("{} / {}", value, self.operand),
                        })?;
                // Fixed-point division: scale 6, round half-up.
                Ok(quotient
                    .round_dp_with_strategy(DIVISION_SCALE, RoundingStrategy::MidpointAwayFromZero))
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.operand)?;
        if let Some(note) = &self.note {
            write!(f, " [{}]", note)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_basic_arithmetic() {
        let v = Operation::new(OperationKind::Add, dec!(3))
            .apply_to(Decimal::ZERO)
            .unwrap();
        assert_eq!(v, dec!(3));

        let v = Operation::new(OperationKind::Subtract, dec!(1))
            .apply_to(v)
            .unwrap();
        assert_eq!(v, dec!(2));

        let v = Operation::new(OperationKind::Multiply, dec!(5))
            .apply_to(v)
            .unwrap();
        assert_eq!(v, dec!(10));
    }

    #[test]
    fn test_division_rounds_half_up_at_scale_6() {
        let v = Operation::new(OperationKind::Divide, dec!(3))
            .apply_to(dec!(10))
            .unwrap();
        assert_eq!(v, dec!(3.333333));

        // Exactly halfway at the 7th digit rounds away from zero.
        let v = Operation::new(OperationKind::Divide, dec!(2))
            .apply_to(dec!(0.000013))
            .unwrap();
        assert_eq!(v, dec!(0.000007));

        let v = Operation::new(OperationKind::Divide, dec!(2))
            .apply_to(dec!(-0.000013))
            .unwrap();
        assert_eq!(v, dec!(-0.000007));
    }

    #[test]
    fn test_divide_by_zero_is_rejected() {
        let err = Operation::new(OperationKind::Divide, Decimal::ZERO)
            .apply_to(dec!(10))
            .unwrap_err();
        assert!(matches!(err, AccumulatorError::DivideByZero));
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = Operation::new(OperationKind::Multiply, Decimal::MAX)
            .apply_to(Decimal::MAX)
            .unwrap_err();
        assert!(matches!(err, AccumulatorError::Overflow { .. }));
    }

    #[test]
    fn test_display_includes_note() {
        let op = Operation::with_note(OperationKind::Multiply, dec!(5), REDO_NOTE);
        assert_eq!(op.to_string(), "MULTIPLY 5 [REDO]");
        let op = Operation::new(OperationKind::Add, dec!(3));
        assert_eq!(op.to_string(), "ADD 3");
    }
}
