use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// An immutable expression tree node.
///
/// The three literal variants double as fully-reduced values; `Neg`, `Add`
/// and `Mul` combine sub-expressions. Trees are acyclic and never mutated
/// after construction, so rewrite passes may share unchanged subtrees
/// through the `Rc` children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    Integer(i64),
    Str(String),
    /// Raw numerator/denominator pair. Deliberately not reduced or
    /// sign-normalized: `Rational(2, -3)` and `Rational(-2, 3)` are
    /// distinct trees.
    Rational(i64, i64),
    Neg(Rc<Expr>),
    Add(Rc<Expr>, Rc<Expr>),
    Mul(Rc<Expr>, Rc<Expr>),
}

impl Expr {
    // Helper constructors for cleaner tree building
    pub fn int(i: i64) -> Rc<Self> {
        Rc::new(Expr::Integer(i))
    }

    pub fn str(s: &str) -> Rc<Self> {
        Rc::new(Expr::Str(s.to_string()))
    }

    pub fn rational(num: i64, den: i64) -> Rc<Self> {
        Rc::new(Expr::Rational(num, den))
    }

    pub fn neg(e: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Neg(e))
    }

    pub fn add(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Add(lhs, rhs))
    }

    pub fn mul(lhs: Rc<Expr>, rhs: Rc<Expr>) -> Rc<Self> {
        Rc::new(Expr::Mul(lhs, rhs))
    }
}

impl fmt::Display for Expr {
    /// Renders the unevaluated tree structure. Interior nodes are always
    /// parenthesized, so no precedence bookkeeping is needed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Integer(i) => write!(f, "{}", i),
            Expr::Str(s) => write!(f, "{}", s),
            Expr::Rational(n, d) => write!(f, "{}/{}", n, d),
            Expr::Neg(e) => write!(f, "-({})", e),
            Expr::Add(l, r) => write!(f, "({} + {})", l, r),
            Expr::Mul(l, r) => write!(f, "({} * {})", l, r),
        }
    }
}
