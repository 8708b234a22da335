// History log and operation stacks for time-travel over applied operations

use crate::accumulator::errors::AccumulatorError;
use crate::accumulator::operation::Operation;
use rust_decimal::Decimal;

/// Outcome of an undo or redo request.
///
/// Undo and redo are total: an empty stack is reported as
/// [`StepOutcome::NothingToDo`] rather than an error, so callers can branch
/// without catching anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step was applied and state changed.
    Performed,
    /// The corresponding stack was empty; state is untouched.
    NothingToDo,
}

impl StepOutcome {
    pub fn performed(self) -> bool {
        matches!(self, StepOutcome::Performed)
    }
}

/// Ordered, append-mostly record of applied operations.
///
/// Insertion order is application order. Replaying the log from zero always
/// reproduces the accumulator's current value; undo maintains that invariant
/// by truncating the tail and replaying what remains.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: Vec<Operation>,
}

impl HistoryLog {
    pub fn new() -> Self {
        HistoryLog {
            entries: Vec::new(),
        }
    }

    /// Append an operation to the log
    pub fn record(&mut self, op: Operation) {
        self.entries.push(op);
    }

    /// Remove the most recent entry.
    ///
    /// Guarded: a truncate on an empty log is a no-op and returns `None`.
    /// Under correct use the log is never shorter than the undo stack, but
    /// undo must not fail if that ever happens.
    pub fn truncate_last(&mut self) -> Option<Operation> {
        self.entries.pop()
    }

    /// Ordered view of the log, oldest first
    pub fn entries(&self) -> &[Operation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// LIFO stack of operations, most-recent at the tail.
///
/// One type serves as both the undo stack and the redo stack.
#[derive(Debug, Default)]
pub struct OpStack {
    ops: Vec<Operation>,
}

impl OpStack {
    pub fn new() -> Self {
        OpStack { ops: Vec::new() }
    }

    pub fn push(&mut self, op: Operation) {
        self.ops.push(op);
    }

    pub fn pop(&mut self) -> Option<Operation> {
        self.ops.pop()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Recompute a value by folding `ops` over zero, oldest first.
///
/// This is the pure recomputation step used by undo (and by the history tape
/// to show running values). It never touches the log or the stacks; that is
/// what distinguishes it from a normal apply.
pub fn replay(ops: &[Operation]) -> Result<Decimal, AccumulatorError> {
    let mut value = Decimal::ZERO;
    for op in ops {
        value = op.apply_to(value)?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::operation::OperationKind;
    use rust_decimal_macros::dec;

    #[test]
    fn test_replay_is_a_left_fold_from_zero() {
        let ops = vec![
            Operation::new(OperationKind::Add, dec!(3)),
            Operation::new(OperationKind::Subtract, dec!(1)),
            Operation::new(OperationKind::Multiply, dec!(5)),
        ];
        assert_eq!(replay(&ops).unwrap(), dec!(10));
        assert_eq!(replay(&[]).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_replay_order_matters() {
        let ops = vec![
            Operation::new(OperationKind::Multiply, dec!(5)),
            Operation::new(OperationKind::Add, dec!(3)),
        ];
        // (0 * 5) + 3, not (0 + 3) * 5
        assert_eq!(replay(&ops).unwrap(), dec!(3));
    }

    #[test]
    fn test_truncate_on_empty_log_is_a_noop() {
        let mut log = HistoryLog::new();
        assert!(log.truncate_last().is_none());
        assert!(log.is_empty());

        log.record(Operation::new(OperationKind::Add, dec!(1)));
        assert_eq!(log.len(), 1);
        assert!(log.truncate_last().is_some());
        assert!(log.truncate_last().is_none());
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut stack = OpStack::new();
        stack.push(Operation::new(OperationKind::Add, dec!(1)));
        stack.push(Operation::new(OperationKind::Add, dec!(2)));

        let top = stack.pop().unwrap();
        assert_eq!(top.operand, dec!(2));
        assert_eq!(stack.len(), 1);

        stack.clear();
        assert!(stack.is_empty());
    }
}
