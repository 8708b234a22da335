//! Parsing for the input line.
//!
//! The frontend is a thin caller: a command is either one of the four
//! arithmetic operations with a decimal operand, or a bare word for
//! undo/redo/quit.  Both symbol and word spellings are accepted:
//!
//! ```text
//! + 3      - 1.5     * 5      / 3
//! add 3    sub 1.5   mul 5    div 3
//! undo     redo      quit
//! ```

use crate::accumulator::operation::OperationKind;
use rust_decimal::Decimal;

/// A parsed input-line command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Apply an arithmetic operation to the accumulator
    Apply(OperationKind, Decimal),
    Undo,
    Redo,
    Quit,
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns a human-readable message on failure; the app shows it in the
    /// status bar.
    pub fn parse(input: &str) -> Result<Command, String> {
        let mut tokens = input.split_whitespace();

        let head = match tokens.next() {
            Some(head) => head,
            None => return Err("Empty command".to_string()),
        };

        // Accept "+3" as well as "+ 3" for the symbol spellings.
        let (word, rest) = if head.len() > 1 && head.starts_with(['+', '-', '*', '/']) {
            (&head[..1], Some(&head[1..]))
        } else {
            (head, None)
        };

        let kind = match word.to_ascii_lowercase().as_str() {
            "+" | "add" => Some(OperationKind::Add),
            "-" | "sub" | "subtract" => Some(OperationKind::Subtract),
            "*" | "x" | "mul" | "multiply" => Some(OperationKind::Multiply),
            "/" | "div" | "divide" => Some(OperationKind::Divide),
            "undo" | "u" => return Self::bare(Command::Undo, tokens.next()),
            "redo" | "r" => return Self::bare(Command::Redo, tokens.next()),
            "quit" | "q" | "exit" => return Self::bare(Command::Quit, tokens.next()),
            _ => None,
        };

        let kind = match kind {
            Some(kind) => kind,
            None => return Err(format!("Unknown command '{}'", word)),
        };

        let operand_text = match (rest, tokens.next()) {
            (Some(glued), None) => glued,
            (None, Some(separate)) => separate,
            (Some(_), Some(_)) => return Err("Too many operands".to_string()),
            (None, None) => return Err(format!("'{}' needs an operand", word)),
        };

        if tokens.next().is_some() {
            return Err("Too many operands".to_string());
        }

        let operand: Decimal = operand_text
            .parse()
            .map_err(|_| format!("'{}' is not a decimal number", operand_text))?;

        Ok(Command::Apply(kind, operand))
    }

    fn bare(cmd: Command, trailing: Option<&str>) -> Result<Command, String> {
        match trailing {
            Some(extra) => Err(format!("Unexpected '{}' after command", extra)),
            None => Ok(cmd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_symbol_commands() {
        assert_eq!(
            Command::parse("+ 3").unwrap(),
            Command::Apply(OperationKind::Add, dec!(3))
        );
        assert_eq!(
            Command::parse("- 1.5").unwrap(),
            Command::Apply(OperationKind::Subtract, dec!(1.5))
        );
        assert_eq!(
            Command::parse("* 5").unwrap(),
            Command::Apply(OperationKind::Multiply, dec!(5))
        );
        assert_eq!(
            Command::parse("/ 3").unwrap(),
            Command::Apply(OperationKind::Divide, dec!(3))
        );
    }

    #[test]
    fn test_glued_symbol_commands() {
        assert_eq!(
            Command::parse("+3").unwrap(),
            Command::Apply(OperationKind::Add, dec!(3))
        );
        assert_eq!(
            Command::parse("/2.25").unwrap(),
            Command::Apply(OperationKind::Divide, dec!(2.25))
        );
        // "-1.5" alone is a subtraction of 1.5, not a negative literal
        assert_eq!(
            Command::parse("-1.5").unwrap(),
            Command::Apply(OperationKind::Subtract, dec!(1.5))
        );
    }

    #[test]
    fn test_word_commands() {
        assert_eq!(
            Command::parse("add 3").unwrap(),
            Command::Apply(OperationKind::Add, dec!(3))
        );
        assert_eq!(
            Command::parse("DIVIDE 3").unwrap(),
            Command::Apply(OperationKind::Divide, dec!(3))
        );
        assert_eq!(Command::parse("undo").unwrap(), Command::Undo);
        assert_eq!(Command::parse("redo").unwrap(), Command::Redo);
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
    }

    #[test]
    fn test_negative_operands() {
        assert_eq!(
            Command::parse("+ -2").unwrap(),
            Command::Apply(OperationKind::Add, dec!(-2))
        );
        assert_eq!(
            Command::parse("* -0.5").unwrap(),
            Command::Apply(OperationKind::Multiply, dec!(-0.5))
        );
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("   ").is_err());
        assert!(Command::parse("+").is_err());
        assert!(Command::parse("+ abc").is_err());
        assert!(Command::parse("+ 1 2").is_err());
        assert!(Command::parse("undo 3").is_err());
        assert!(Command::parse("bogus 1").is_err());
    }
}
