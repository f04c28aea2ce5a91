//! reprise-core: Typed expression embedding with two backends.
//!
//! An expression is a generic function over the vocabulary traits it
//! needs; the backend argument decides what it means. [`Evaluator`]
//! computes it as a host value, [`Builder`] records it as an untyped
//! interchange tree that reprise-eval can later rebuild into a typed
//! callable value.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`evaluate()`] -- run an expression directly
//! - [`build()`] -- record an expression as an interchange tree
//! - vocabulary traits: [`FuncOps`], [`ArithOps`], [`BoolOps`],
//!   [`ListOps`], [`ConsoleOps`]
//! - backends: [`Evaluator`], [`Builder`] (with [`Quoted`])
//! - [`HostFn`] -- the evaluator's callable function representation
//! - [`Console`] -- the host I/O seam, with [`StdConsole`] and
//!   [`ScriptedConsole`]

use reprise_interchange::Expr;

pub mod backend;
pub mod builder;
pub mod console;
pub mod evaluator;
pub mod names;
pub mod vocab;

// ── Convenience re-exports: key types ────────────────────────────────

pub use backend::{Backend, HostFn};
pub use builder::{Builder, Quoted};
pub use console::{Console, ScriptedConsole, StdConsole};
pub use evaluator::Evaluator;
pub use names::GenSym;
pub use vocab::{ArithOps, BoolOps, ConsoleOps, FuncOps, ListOps};

// ── Entry points ─────────────────────────────────────────────────────

/// Run an expression directly; the result is the host value itself.
pub fn evaluate<A, F>(f: F) -> A
where
    F: FnOnce(Evaluator) -> A,
{
    f(Evaluator)
}

/// Record an expression as an untyped interchange tree.
pub fn build<A, F>(f: F) -> Expr
where
    A: Clone + 'static,
    F: FnOnce(Builder) -> Quoted<A>,
{
    f(Builder).into_expr()
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
