//! The direct backend: an expression means what it computes.

use crate::backend::{Backend, HostFn};
use crate::vocab::{ArithOps, BoolOps, FuncOps, ListOps};

/// Evaluates expressions strictly as host values. `Repr<A>` is `A`
/// itself, so running an expression is nothing more than calling the
/// generic function with this backend.
///
/// There is no `ConsoleOps` impl: a strict pure backend has no story
/// for interleaved reads, and recorded console programs are consumed
/// elsewhere. See the note on [`crate::vocab::ConsoleOps`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator;

impl Backend for Evaluator {
    type Repr<A: Clone + 'static> = A;
}

impl FuncOps for Evaluator {
    fn lam<A, B, F>(&self, body: F) -> HostFn<A, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        HostFn::new(body)
    }

    fn app<A, B>(&self, func: HostFn<A, B>, arg: A) -> B
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        func.call(arg)
    }
}

// Arithmetic wraps on overflow, the same semantics a reconstructed
// tree computes with.
impl ArithOps for Evaluator {
    fn int(&self, value: i64) -> i64 {
        value
    }

    fn plus(&self, lhs: i64, rhs: i64) -> i64 {
        lhs.wrapping_add(rhs)
    }

    fn minus(&self, lhs: i64, rhs: i64) -> i64 {
        lhs.wrapping_sub(rhs)
    }

    fn times(&self, lhs: i64, rhs: i64) -> i64 {
        lhs.wrapping_mul(rhs)
    }
}

impl BoolOps for Evaluator {
    fn bool(&self, value: bool) -> bool {
        value
    }

    fn and(&self, lhs: bool, rhs: bool) -> bool {
        lhs && rhs
    }

    fn or(&self, lhs: bool, rhs: bool) -> bool {
        lhs || rhs
    }

    fn not(&self, value: bool) -> bool {
        !value
    }

    // Both branches reach here already evaluated; selection is all
    // that is left to do.
    fn cond<A>(&self, guard: bool, then: A, otherwise: A) -> A
    where
        A: Clone + 'static,
    {
        if guard {
            then
        } else {
            otherwise
        }
    }
}

impl ListOps for Evaluator {
    fn map<A, B, F>(&self, list: Vec<A>, f: F) -> Vec<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(A) -> B + 'static,
    {
        list.into_iter().map(f).collect()
    }

    fn fold<A, B, F>(&self, list: Vec<A>, init: B, f: F) -> B
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(B, A) -> B + 'static,
    {
        list.into_iter().fold(init, f)
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn affine<E: ArithOps>(e: E) -> E::Repr<HostFn<i64, i64>> {
        e.lam(move |x: E::Repr<i64>| e.plus(e.times(x, e.int(5)), e.int(6)))
    }

    #[test]
    fn affine_function_evaluates() {
        let f = affine(Evaluator);
        assert_eq!(f.call(2), 16);
        assert_eq!(f.call(0), 6);
        assert_eq!(f.call(-1), 1);
    }

    #[test]
    fn identity_evaluates() {
        let f: HostFn<i64, i64> = Evaluator.lam(move |x: i64| x);
        assert_eq!(f.call(2), 2);
    }

    #[test]
    fn curried_function_evaluates() {
        fn scale_shift<E: ArithOps>(e: E) -> E::Repr<HostFn<i64, HostFn<i64, i64>>> {
            e.lam(move |x: E::Repr<i64>| {
                e.lam(move |y: E::Repr<i64>| e.plus(e.times(e.int(5), x.clone()), y))
            })
        }
        let f = scale_shift(Evaluator);
        assert_eq!(f.call(2).call(6), 16);
        assert_eq!(f.call(0).call(9), 9);
    }

    #[test]
    fn higher_order_argument_evaluates() {
        fn square_gap<E: ArithOps>(e: E) -> E::Repr<HostFn<HostFn<i64, i64>, i64>> {
            e.lam(move |g: E::Repr<HostFn<i64, i64>>| {
                e.minus(e.app(g.clone(), e.int(2)), e.app(g, e.int(3)))
            })
        }
        let g: HostFn<i64, i64> =
            Evaluator.lam(move |z: i64| Evaluator.plus(Evaluator.times(z, z), Evaluator.int(2)));
        assert_eq!(square_gap(Evaluator).call(g), -5);
    }

    #[test]
    fn conditional_selects_by_guard() {
        fn pick<E: ArithOps + BoolOps>(e: E) -> E::Repr<HostFn<bool, i64>> {
            e.lam(move |b: E::Repr<bool>| e.cond(b, e.int(10), e.int(20)))
        }
        let f = pick(Evaluator);
        assert_eq!(f.call(true), 10);
        assert_eq!(f.call(false), 20);
    }

    #[test]
    fn arithmetic_wraps_at_the_boundaries() {
        let e = Evaluator;
        assert_eq!(e.plus(i64::MAX, 1), i64::MIN);
        assert_eq!(e.minus(i64::MIN, 1), i64::MAX);
        assert_eq!(e.times(i64::MAX, 2), -2);
    }

    #[test]
    fn boolean_connectives_evaluate() {
        let e = Evaluator;
        assert!(e.and(true, true));
        assert!(!e.and(true, false));
        assert!(e.or(false, true));
        assert!(!e.or(false, false));
        assert!(e.not(false));
    }

    #[test]
    fn map_and_fold_evaluate() {
        let e = Evaluator;
        let doubled = e.map(vec![1, 2, 3], move |x: i64| e.times(x, e.int(2)));
        assert_eq!(doubled, vec![2, 4, 6]);

        let sum = e.fold(vec![1, 2, 3, 4], e.int(0), move |acc: i64, x: i64| {
            e.plus(acc, x)
        });
        assert_eq!(sum, 10);
    }
}
