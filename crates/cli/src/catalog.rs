//! The demo catalog: small named expressions recorded on demand.
//!
//! Each entry is written once, generically, against the vocabulary
//! traits; the `demo` subcommand hands it the Builder and prints the
//! recorded tree.

use reprise_core::{build, ArithOps, BoolOps, Builder, ConsoleOps, FuncOps, HostFn, ListOps};
use reprise_interchange::Expr;

/// Every name `build_demo` accepts, for the unknown-name message.
pub(crate) const NAMES: [&str; 8] = [
    "affine",
    "identity",
    "scale-shift",
    "square-gap",
    "pick",
    "double-all",
    "total",
    "echo",
];

pub(crate) fn build_demo(name: &str) -> Option<Expr> {
    match name {
        "affine" => Some(build(affine)),
        "identity" => Some(build(identity)),
        "scale-shift" => Some(build(scale_shift)),
        "square-gap" => Some(build(square_gap)),
        "pick" => Some(build(pick)),
        "double-all" => Some(build(double_all)),
        "total" => Some(build(total)),
        "echo" => Some(build(|e: Builder| e.print_line(e.read_line()))),
        _ => None,
    }
}

/// f(x) = x * 5 + 6
fn affine<E: ArithOps>(e: E) -> E::Repr<HostFn<i64, i64>> {
    e.lam(move |x: E::Repr<i64>| e.plus(e.times(x, e.int(5)), e.int(6)))
}

/// f(x) = x
fn identity<E: FuncOps>(e: E) -> E::Repr<HostFn<i64, i64>> {
    e.lam(move |x: E::Repr<i64>| x)
}

/// f(x)(y) = 5 * x + y
fn scale_shift<E: ArithOps>(e: E) -> E::Repr<HostFn<i64, HostFn<i64, i64>>> {
    e.lam(move |x: E::Repr<i64>| {
        e.lam(move |y: E::Repr<i64>| e.plus(e.times(e.int(5), x.clone()), y))
    })
}

/// f(g) = g(2) - g(3)
fn square_gap<E: ArithOps>(e: E) -> E::Repr<HostFn<HostFn<i64, i64>, i64>> {
    e.lam(move |g: E::Repr<HostFn<i64, i64>>| {
        e.minus(e.app(g.clone(), e.int(2)), e.app(g, e.int(3)))
    })
}

/// f(b) = 10 when b, else 20
fn pick<E: ArithOps + BoolOps>(e: E) -> E::Repr<HostFn<bool, i64>> {
    e.lam(move |b: E::Repr<bool>| e.cond(b, e.int(10), e.int(20)))
}

/// f(xs) = every element doubled
fn double_all<E: ArithOps + ListOps>(e: E) -> E::Repr<HostFn<Vec<i64>, Vec<i64>>> {
    e.lam(move |xs: E::Repr<Vec<i64>>| e.map(xs, move |x: E::Repr<i64>| e.times(x, e.int(2))))
}

/// f(xs) = sum of the elements
fn total<E: ArithOps + ListOps>(e: E) -> E::Repr<HostFn<Vec<i64>, i64>> {
    e.lam(move |xs: E::Repr<Vec<i64>>| {
        e.fold(xs, e.int(0), move |acc: E::Repr<i64>, x: E::Repr<i64>| {
            e.plus(acc, x)
        })
    })
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use reprise_interchange::to_value;

    #[test]
    fn every_catalog_entry_records_and_serializes() {
        for name in NAMES {
            let tree = build_demo(name).unwrap_or_else(|| panic!("{} must record", name));
            assert!(to_value(&tree).is_ok(), "{} must serialize", name);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(build_demo("no-such-demo"), None);
    }
}
