//! Structural predicates over expression trees.
//!
//! These walk the unevaluated tree and never fail: type errors lurking in a
//! subtree only surface under evaluation, not under analysis.

use num_traits::Zero;

use crate::expression::Expr;

impl Expr {
    /// True when any literal in the tree is zero-valued: an `Integer(0)`
    /// anywhere, or a `Rational` with a zero numerator. String literals
    /// never count, and `Neg` is transparent (the sign of a zero does not
    /// make it non-zero).
    pub fn contains_zero(&self) -> bool {
        match self {
            Expr::Integer(i) => i.is_zero(),
            Expr::Str(_) => false,
            Expr::Rational(n, _) => n.is_zero(),
            Expr::Neg(e) => e.contains_zero(),
            Expr::Add(l, r) | Expr::Mul(l, r) => l.contains_zero() || r.contains_zero(),
        }
    }
}
