use std::fmt;
use std::rc::Rc;

use litexpr_ast::Expr;
use serde::{Deserialize, Serialize};

/// A fully-reduced expression: one of the three literal leaf kinds.
///
/// [`crate::eval`] always lands here; evaluating a value-shaped tree is the
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    Integer(i64),
    Str(String),
    Rational(i64, i64),
}

/// Kind tag of a [`Value`], used by the addition dispatch table and in
/// error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Str,
    Rational,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Str(_) => ValueKind::Str,
            Value::Rational(_, _) => ValueKind::Rational,
        }
    }

    /// Rebuild the literal leaf this value reduces from, so results can be
    /// fed back into larger trees.
    pub fn into_expr(self) -> Rc<Expr> {
        match self {
            Value::Integer(i) => Expr::int(i),
            Value::Str(s) => Rc::new(Expr::Str(s)),
            Value::Rational(n, d) => Expr::rational(n, d),
        }
    }
}

impl fmt::Display for Value {
    /// Renders exactly as the corresponding literal leaf renders.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Str(s) => write!(f, "{}", s),
            Value::Rational(n, d) => write!(f, "{}/{}", n, d),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Str => write!(f, "string"),
            ValueKind::Rational => write!(f, "rational"),
        }
    }
}
