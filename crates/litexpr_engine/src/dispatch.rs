//! The addition dispatch table.
//!
//! What addition means depends on the ordered pair of operand kinds, not on
//! either side alone. The whole table lives in this one `match` over the
//! closed [`Value`] sum type, so the compiler checks it is total. Adding a
//! new value kind means adding its rows here (there is no catch-all arm, so
//! the new variant will not compile until its rows exist) — nothing in the
//! evaluator or the existing kinds changes.

use crate::error::EvalError;
use crate::value::Value;

/// Combine two evaluated values under addition.
pub fn add_values(lhs: &Value, rhs: &Value) -> Result<Value, EvalError> {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => a
            .checked_add(*b)
            .map(Value::Integer)
            .ok_or(EvalError::Overflow { op: "add" }),
        // Mixing an integer into a string concatenates the integer's
        // decimal form on its own side of the pair.
        (Value::Integer(i), Value::Str(s)) => Ok(Value::Str(format!("{}{}", i, s))),
        (Value::Str(s), Value::Integer(i)) => Ok(Value::Str(format!("{}{}", s, i))),
        // Deliberate gaps: string + string, and every pairing that touches
        // a rational. These must fail loudly rather than produce nothing.
        (Value::Str(_), Value::Str(_))
        | (Value::Rational(_, _), _)
        | (_, Value::Rational(_, _)) => Err(EvalError::Unimplemented {
            lhs: lhs.kind(),
            rhs: rhs.kind(),
        }),
    }
}
