//! The accumulator core: engine, operations, and error types.
//!
//! - [`engine`] — the mutable [`Accumulator`] owning the current value, the
//!   history log, and the undo/redo stacks.
//! - [`operation`] — immutable [`Operation`] records and the checked decimal
//!   arithmetic that applies them.
//! - [`errors`] — [`AccumulatorError`].

pub mod engine;
pub mod errors;
pub mod operation;

pub use engine::{Accumulator, INIT_VALUE};
pub use errors::AccumulatorError;
pub use operation::{Operation, OperationKind, DIVISION_SCALE, REDO_NOTE};
