//! Error types for evaluation.

use std::fmt;

use thiserror::Error;

use crate::value::ValueKind;

/// The operand kinds an operation rejected, for error reporting. Unary
/// operations name one kind, binary operations the full ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    Unary(ValueKind),
    Binary(ValueKind, ValueKind),
}

impl fmt::Display for Operands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operands::Unary(k) => write!(f, "a {} value", k),
            Operands::Binary(l, r) => write!(f, "{} and {} operands", l, r),
        }
    }
}

/// Errors surfaced by [`crate::eval`]. Every variant aborts evaluation of
/// the whole tree; there is no partial result or default substitution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// An operation received evaluated values of kinds it does not support
    /// (negating a string, multiplying a non-integer).
    #[error("type mismatch: cannot {op} {operands}")]
    TypeMismatch {
        op: &'static str,
        operands: Operands,
    },

    /// An addition pair the dispatch table deliberately leaves unhandled.
    #[error("addition of {lhs} and {rhs} is not implemented")]
    Unimplemented { lhs: ValueKind, rhs: ValueKind },

    /// An integer operation left the i64 range.
    #[error("arithmetic overflow in {op}")]
    Overflow { op: &'static str },
}
