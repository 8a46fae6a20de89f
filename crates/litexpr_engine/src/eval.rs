//! Structural evaluation of expression trees.

use litexpr_ast::Expr;
use tracing::debug;

use crate::dispatch::add_values;
use crate::error::{EvalError, Operands};
use crate::value::Value;

/// Reduce an expression tree to a single [`Value`].
///
/// Literals evaluate to themselves. `Neg` negates integers and rationals
/// (numerator only), `Add` combines through the dispatch table, and `Mul`
/// is defined for integers only. The first type or overflow error aborts
/// evaluation of the whole tree.
///
/// Recursion depth follows tree height, with no explicit guard; callers
/// with pathologically deep trees need a larger stack.
pub fn eval(expr: &Expr) -> Result<Value, EvalError> {
    match expr {
        Expr::Integer(i) => Ok(Value::Integer(*i)),
        Expr::Str(s) => Ok(Value::Str(s.clone())),
        Expr::Rational(n, d) => Ok(Value::Rational(*n, *d)),
        Expr::Neg(e) => match eval(e)? {
            Value::Integer(i) => i
                .checked_neg()
                .map(Value::Integer)
                .ok_or(EvalError::Overflow { op: "negate" }),
            Value::Rational(n, d) => n
                .checked_neg()
                .map(|n| Value::Rational(n, d))
                .ok_or(EvalError::Overflow { op: "negate" }),
            v @ Value::Str(_) => {
                debug!(kind = %v.kind(), "negation rejected a non-numeric value");
                Err(EvalError::TypeMismatch {
                    op: "negate",
                    operands: Operands::Unary(v.kind()),
                })
            }
        },
        Expr::Add(l, r) => {
            let lhs = eval(l)?;
            let rhs = eval(r)?;
            add_values(&lhs, &rhs)
        }
        Expr::Mul(l, r) => match (eval(l)?, eval(r)?) {
            (Value::Integer(a), Value::Integer(b)) => a
                .checked_mul(b)
                .map(Value::Integer)
                .ok_or(EvalError::Overflow { op: "multiply" }),
            (lhs, rhs) => {
                debug!(lhs = %lhs.kind(), rhs = %rhs.kind(), "multiply rejected non-integer operands");
                Err(EvalError::TypeMismatch {
                    op: "multiply",
                    operands: Operands::Binary(lhs.kind(), rhs.kind()),
                })
            }
        },
    }
}
