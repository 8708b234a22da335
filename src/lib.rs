//! # Introduction
//!
//! retally is a decimal accumulator with time-travel: arithmetic operations
//! (add, subtract, multiply, divide) are applied to a running value and can
//! be undone and redone.  Undo does not apply inverse operations — it
//! truncates the operation log and **replays** the remainder from zero, so
//! the displayed value always equals "apply every operation currently in
//! history, in order, to zero".  The history is navigated through a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input line → Command → Accumulator → History log → TUI
//! ```
//!
//! 1. [`accumulator`] — the engine: applies operations, undoes by
//!    truncate-and-replay, redoes incrementally with a `REDO` provenance tag.
//! 2. [`history`] — the ordered [`history::HistoryLog`], the undo/redo
//!    [`history::OpStack`]s, and the pure [`history::replay`] fold.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Arithmetic
//!
//! All values are exact [`rust_decimal::Decimal`]s.  Division is the only
//! lossy point: quotients are rounded to 6 fractional digits, half-up.
//! Dividing by zero is rejected atomically; undo/redo on an empty stack is a
//! reported no-op, never a failure.

pub mod accumulator;
pub mod history;
pub mod ui;
