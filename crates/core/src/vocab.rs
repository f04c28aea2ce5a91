//! Vocabulary capability traits.
//!
//! An expression is an ordinary generic function over the traits it
//! needs (`fn f<E: ArithOps>(e: E) -> E::Repr<...>`). It acquires
//! meaning only when handed a backend: [`crate::Evaluator`] computes it,
//! [`crate::Builder`] records it as an interchange tree.
//!
//! Vocabularies are deliberately small. A new domain adds a new trait
//! here and per-backend impls, without touching existing expressions.

use crate::backend::{Backend, HostFn};

/// Function abstraction and application.
pub trait FuncOps: Backend {
    /// A function literal. The host closure is the body; the evaluator
    /// runs it on demand, the builder feeds it one fresh variable to
    /// reify it as a `Lam` node.
    fn lam<A, B, F>(&self, body: F) -> Self::Repr<HostFn<A, B>>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(Self::Repr<A>) -> Self::Repr<B> + 'static;

    /// Apply a function-typed expression to an argument.
    fn app<A, B>(&self, func: Self::Repr<HostFn<A, B>>, arg: Self::Repr<A>) -> Self::Repr<B>
    where
        A: Clone + 'static,
        B: Clone + 'static;
}

/// Integer literals and arithmetic. Operations wrap on overflow.
pub trait ArithOps: FuncOps {
    fn int(&self, value: i64) -> Self::Repr<i64>;
    fn plus(&self, lhs: Self::Repr<i64>, rhs: Self::Repr<i64>) -> Self::Repr<i64>;
    fn minus(&self, lhs: Self::Repr<i64>, rhs: Self::Repr<i64>) -> Self::Repr<i64>;
    fn times(&self, lhs: Self::Repr<i64>, rhs: Self::Repr<i64>) -> Self::Repr<i64>;
}

/// Boolean literals, connectives and conditional selection.
pub trait BoolOps: Backend {
    fn bool(&self, value: bool) -> Self::Repr<bool>;
    fn and(&self, lhs: Self::Repr<bool>, rhs: Self::Repr<bool>) -> Self::Repr<bool>;
    fn or(&self, lhs: Self::Repr<bool>, rhs: Self::Repr<bool>) -> Self::Repr<bool>;
    fn not(&self, value: Self::Repr<bool>) -> Self::Repr<bool>;

    /// Conditional selection at any expression type. Both branches are
    /// ordinary strict arguments; there is no short-circuiting here.
    fn cond<A>(
        &self,
        guard: Self::Repr<bool>,
        then: Self::Repr<A>,
        otherwise: Self::Repr<A>,
    ) -> Self::Repr<A>
    where
        A: Clone + 'static;
}

/// Map and fold over host lists.
pub trait ListOps: Backend {
    fn map<A, B, F>(&self, list: Self::Repr<Vec<A>>, f: F) -> Self::Repr<Vec<B>>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(Self::Repr<A>) -> Self::Repr<B> + 'static;

    /// Left fold; `f` takes the accumulator first.
    fn fold<A, B, F>(&self, list: Self::Repr<Vec<A>>, init: Self::Repr<B>, f: F) -> Self::Repr<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(Self::Repr<B>, Self::Repr<A>) -> Self::Repr<B> + 'static;
}

/// Text literals and console input/output.
///
/// Only the builder implements this today: recorded programs name each
/// read's result (`_result_readLn_0`, `_result_readLn_1`, ...) and emit
/// `printLn` operator nodes. Running one directly would need a binding
/// scheme for those read results, which no backend defines yet; host
/// code that wants real I/O talks to [`crate::Console`] instead.
pub trait ConsoleOps: FuncOps {
    fn text(&self, value: &str) -> Self::Repr<String>;
    fn read_line(&self) -> Self::Repr<String>;
    fn print_line(&self, line: Self::Repr<String>) -> Self::Repr<()>;
}
