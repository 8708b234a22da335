// Accumulator engine: applies operations and time-travels over their history

use crate::accumulator::errors::AccumulatorError;
use crate::accumulator::operation::{Operation, OperationKind, REDO_NOTE};
use crate::history::{replay, HistoryLog, OpStack, StepOutcome};
use rust_decimal::Decimal;

/// Value the accumulator starts at and that every replay folds from.
pub const INIT_VALUE: Decimal = Decimal::ZERO;

/// The accumulator: a running decimal value with undoable history.
///
/// Every successful arithmetic call appends to the history log and the undo
/// stack and clears the redo stack. Undo truncates the log and rebuilds the
/// value by replaying what remains from zero; redo re-applies a single
/// operation incrementally and records a `REDO`-tagged log entry.
///
/// The invariant maintained throughout: replaying [`history`](Self::history)
/// from zero reproduces [`current_value`](Self::current_value) exactly.
pub struct Accumulator {
    /// Current value
    current: Decimal,

    /// Ordered record of applied operations, oldest first
    log: HistoryLog,

    /// Operations eligible for undo, most-recent at the tail
    undo_stack: OpStack,

    /// Operations most recently undone, eligible for redo
    redo_stack: OpStack,
}

impl Accumulator {
    /// Create an accumulator at zero with empty logs
    pub fn new() -> Self {
        Accumulator {
            current: INIT_VALUE,
            log: HistoryLog::new(),
            undo_stack: OpStack::new(),
            redo_stack: OpStack::new(),
        }
    }

    /// Add `operand` to the current value
    pub fn add(&mut self, operand: Decimal) -> Result<Decimal, AccumulatorError> {
        self.perform(Operation::new(OperationKind::Add, operand))
    }

    /// Subtract `operand` from the current value
    pub fn subtract(&mut self, operand: Decimal) -> Result<Decimal, AccumulatorError> {
        self.perform(Operation::new(OperationKind::Subtract, operand))
    }

    /// Multiply the current value by `operand`
    pub fn multiply(&mut self, operand: Decimal) -> Result<Decimal, AccumulatorError> {
        self.perform(Operation::new(OperationKind::Multiply, operand))
    }

    /// Divide the current value by `operand`, rounding to scale 6 half-up.
    ///
    /// Fails with [`AccumulatorError::DivideByZero`] on a zero operand; the
    /// failed call leaves the value, the log, and both stacks untouched.
    pub fn divide(&mut self, operand: Decimal) -> Result<Decimal, AccumulatorError> {
        self.perform(Operation::new(OperationKind::Divide, operand))
    }

    /// Undo the most recent operation by truncate-and-replay.
    ///
    /// Pops the undo stack onto the redo stack, drops the history tail, and
    /// rebuilds the current value from zero over the remaining log. Returns
    /// [`StepOutcome::NothingToDo`] when there is nothing to undo.
    pub fn undo(&mut self) -> StepOutcome {
        let op = match self.undo_stack.pop() {
            Some(op) => op,
            None => return StepOutcome::NothingToDo,
        };
        self.redo_stack.push(op);

        // Guarded: the log should never be shorter than the undo stack, but
        // undo must stay total if it ever is.
        self.log.truncate_last();

        self.current = match replay(self.log.entries()) {
            Ok(value) => value,
            // Replay only re-applies operations that were validated when
            // first performed, so a failure here is a logic bug.
            Err(e) => unreachable!("replay of validated history failed: {}", e),
        };
        StepOutcome::Performed
    }

    /// Re-apply the most recently undone operation.
    ///
    /// A single incremental step, not a rebuild: nothing between the undo and
    /// this redo can have diverged the history. The re-applied operation is
    /// recorded as a fresh log entry tagged `REDO`.
    pub fn redo(&mut self) -> StepOutcome {
        let op = match self.redo_stack.pop() {
            Some(op) => op,
            None => return StepOutcome::NothingToDo,
        };

        self.current = match op.apply_to(self.current) {
            Ok(value) => value,
            // The operation succeeded when first applied to this same value.
            Err(e) => unreachable!("redo of previously applied operation failed: {}", e),
        };
        self.log
            .record(Operation::with_note(op.kind, op.operand, REDO_NOTE));
        self.undo_stack.push(op);
        StepOutcome::Performed
    }

    /// Current value
    pub fn current_value(&self) -> Decimal {
        self.current
    }

    /// Ordered operation log, oldest first
    pub fn history(&self) -> &[Operation] {
        self.log.entries()
    }

    /// Number of operations eligible for undo
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of operations eligible for redo
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Validate, then commit: the new value is computed before any log or
    /// stack is touched, so a failed operation mutates nothing.
    fn perform(&mut self, op: Operation) -> Result<Decimal, AccumulatorError> {
        let value = op.apply_to(self.current)?;

        self.current = value;
        self.undo_stack.push(op.clone());
        // A new operation invalidates the redo future.
        self.redo_stack.clear();
        self.log.record(op);

        Ok(value)
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}
