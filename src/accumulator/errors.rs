//! Error types for the accumulator core.
//!
//! This module defines [`AccumulatorError`], which covers everything that can
//! make an arithmetic operation fail. Failures are atomic: a rejected
//! operation is never recorded in the history log or either stack.
//!
//! An undo or redo with nothing to undo or redo is *not* an error; it is the
//! [`StepOutcome::NothingToDo`](crate::history::StepOutcome) outcome.

use std::fmt;

/// Errors that can occur while applying an operation
#[derive(Debug, Clone, PartialEq)]
pub enum AccumulatorError {
    /// Divide was called with a zero operand
    DivideByZero,

    /// Checked decimal arithmetic had no representable result
    Overflow { operation: String },
}

impl fmt::Display for AccumulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccumulatorError::DivideByZero => {
                write!(f, "Cannot divide by zero")
            }
            AccumulatorError::Overflow { operation } => {
                write!(f, "Decimal overflow in operation: {}", operation)
            }
        }
    }
}

impl std::error::Error for AccumulatorError {}
