//! Negative-constant normalization.
//!
//! Rewrites a tree so that no literal holds a negative value directly;
//! negativity is always expressed through an explicit [`Expr::Neg`] wrapper.
//! This is a single structural pass, not a fixpoint: a pre-existing `Neg`
//! over a literal that itself normalizes into a `Neg` stays a double
//! wrapper, `Neg(Neg(...))`, and is not collapsed.
//!
//! One boundary exception: `i64::MIN` has no positive counterpart, so a
//! literal component holding it keeps its sign rather than wrapping an
//! unrepresentable magnitude. The no-negative-literal invariant therefore
//! holds for every literal whose magnitude fits in i64.

use std::rc::Rc;

use num_traits::Signed;

use crate::expression::Expr;

/// Produce an equivalent tree with no negative literal. The input is never
/// mutated; unchanged subtrees are shared with the result.
pub fn normalize_negatives(expr: &Rc<Expr>) -> Rc<Expr> {
    match expr.as_ref() {
        Expr::Integer(i) => match i.checked_neg() {
            Some(p) if i.is_negative() => Expr::neg(Expr::int(p)),
            // Non-negative, or i64::MIN with no representable magnitude.
            _ => Rc::clone(expr),
        },
        Expr::Str(_) => Rc::clone(expr),
        // Zero has no sign: a zero numerator or denominator falls through
        // to the unchanged arm, as does a component stuck at i64::MIN.
        Expr::Rational(n, d) => match (n.checked_neg(), d.checked_neg()) {
            (Some(pn), Some(pd)) if n.is_negative() && d.is_negative() => Expr::rational(pn, pd),
            (_, Some(pd)) if d.is_negative() && !n.is_negative() => {
                Expr::neg(Expr::rational(*n, pd))
            }
            (Some(pn), _) if n.is_negative() && !d.is_negative() => {
                Expr::neg(Expr::rational(pn, *d))
            }
            _ => Rc::clone(expr),
        },
        Expr::Neg(e) => {
            let inner = normalize_negatives(e);
            if Rc::ptr_eq(&inner, e) {
                Rc::clone(expr)
            } else {
                Expr::neg(inner)
            }
        }
        Expr::Add(l, r) => {
            let (nl, nr) = (normalize_negatives(l), normalize_negatives(r));
            if Rc::ptr_eq(&nl, l) && Rc::ptr_eq(&nr, r) {
                Rc::clone(expr)
            } else {
                Expr::add(nl, nr)
            }
        }
        Expr::Mul(l, r) => {
            let (nl, nr) = (normalize_negatives(l), normalize_negatives(r));
            if Rc::ptr_eq(&nl, l) && Rc::ptr_eq(&nr, r) {
                Rc::clone(expr)
            } else {
                Expr::mul(nl, nr)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_integer_gets_wrapped() {
        let n = normalize_negatives(&Expr::int(-3));
        assert_eq!(n, Expr::neg(Expr::int(3)));
        assert_eq!(n.to_string(), "-(3)");
    }

    #[test]
    fn non_negative_integer_unchanged() {
        let e = Expr::int(3);
        assert!(Rc::ptr_eq(&normalize_negatives(&e), &e));
        let z = Expr::int(0);
        assert!(Rc::ptr_eq(&normalize_negatives(&z), &z));
    }

    #[test]
    fn rational_sign_cases() {
        // Double negative cancels without any wrapper.
        assert_eq!(
            normalize_negatives(&Expr::rational(-2, -3)),
            Expr::rational(2, 3)
        );
        // Negative denominator moves out as a wrapper.
        let n = normalize_negatives(&Expr::rational(2, -3));
        assert_eq!(n, Expr::neg(Expr::rational(2, 3)));
        assert_eq!(n.to_string(), "-(2/3)");
        // Negative numerator likewise.
        assert_eq!(
            normalize_negatives(&Expr::rational(-2, 3)),
            Expr::neg(Expr::rational(2, 3))
        );
        // Neither negative: unchanged, including the zero cases.
        let e = Expr::rational(2, 3);
        assert!(Rc::ptr_eq(&normalize_negatives(&e), &e));
        let z = Expr::rational(0, 3);
        assert!(Rc::ptr_eq(&normalize_negatives(&z), &z));
    }

    #[test]
    fn i64_min_literals_keep_their_sign() {
        // i64::MIN cannot be wrapped as Neg of its magnitude; the literal
        // passes through untouched instead of panicking.
        let e = Expr::int(i64::MIN);
        assert!(Rc::ptr_eq(&normalize_negatives(&e), &e));

        let e = Expr::rational(i64::MIN, 3);
        assert!(Rc::ptr_eq(&normalize_negatives(&e), &e));
        let e = Expr::rational(2, i64::MIN);
        assert!(Rc::ptr_eq(&normalize_negatives(&e), &e));
        let e = Expr::rational(i64::MIN, i64::MIN);
        assert!(Rc::ptr_eq(&normalize_negatives(&e), &e));

        // The in-range extreme still normalizes.
        let n = normalize_negatives(&Expr::int(i64::MIN + 1));
        assert_eq!(n, Expr::neg(Expr::int(i64::MAX)));
    }

    #[test]
    fn strings_unchanged() {
        let e = Expr::str("-5");
        assert!(Rc::ptr_eq(&normalize_negatives(&e), &e));
    }

    #[test]
    fn compound_rebuilds_both_sides() {
        let e = Expr::add(Expr::int(-1), Expr::mul(Expr::int(2), Expr::int(-3)));
        let n = normalize_negatives(&e);
        assert_eq!(
            n,
            Expr::add(
                Expr::neg(Expr::int(1)),
                Expr::mul(Expr::int(2), Expr::neg(Expr::int(3)))
            )
        );
    }

    #[test]
    fn existing_neg_wrapper_is_preserved_not_collapsed() {
        // One-pass behavior: the introduced wrapper stacks under the
        // pre-existing one.
        let e = Expr::neg(Expr::int(-3));
        let n = normalize_negatives(&e);
        assert_eq!(n, Expr::neg(Expr::neg(Expr::int(3))));
        assert_eq!(n.to_string(), "-(-(3))");
    }

    #[test]
    fn unchanged_tree_is_shared() {
        let e = Expr::add(Expr::int(1), Expr::neg(Expr::rational(2, 3)));
        assert!(Rc::ptr_eq(&normalize_negatives(&e), &e));
    }
}
