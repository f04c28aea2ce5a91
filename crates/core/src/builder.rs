//! The quoting backend: an expression means the tree it would be.

use std::fmt;
use std::marker::PhantomData;

use reprise_interchange::{ops, Expr, Lit};

use crate::backend::{Backend, HostFn};
use crate::names;
use crate::vocab::{ArithOps, BoolOps, ConsoleOps, FuncOps, ListOps};

/// An interchange tree tagged with the type of the expression it was
/// recorded from. The tag is phantom; the payload is exactly one tree.
pub struct Quoted<A> {
    expr: Expr,
    _marker: PhantomData<fn() -> A>,
}

impl<A> Quoted<A> {
    fn new(expr: Expr) -> Self {
        Quoted {
            expr,
            _marker: PhantomData,
        }
    }

    /// Drop the phantom type and take the tree.
    pub fn into_expr(self) -> Expr {
        self.expr
    }
}

impl<A> Clone for Quoted<A> {
    fn clone(&self) -> Self {
        Quoted::new(self.expr.clone())
    }
}

impl<A> fmt::Debug for Quoted<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Quoted").field(&self.expr).finish()
    }
}

fn op1<A, B>(op: &str, a: Quoted<A>) -> Quoted<B> {
    Quoted::new(Expr::OpApp {
        op: op.to_string(),
        args: vec![a.into_expr()],
    })
}

fn op2<A, B, C>(op: &str, a: Quoted<A>, b: Quoted<B>) -> Quoted<C> {
    Quoted::new(Expr::OpApp {
        op: op.to_string(),
        args: vec![a.into_expr(), b.into_expr()],
    })
}

fn op3<A, B, C, D>(op: &str, a: Quoted<A>, b: Quoted<B>, c: Quoted<C>) -> Quoted<D> {
    Quoted::new(Expr::OpApp {
        op: op.to_string(),
        args: vec![a.into_expr(), b.into_expr(), c.into_expr()],
    })
}

/// Records expressions as untyped trees instead of running them.
///
/// Function-shaped things, whether `lam` bodies or the closures `map`
/// and `fold` take, are reified by drawing a fresh name from the shared
/// generator and running the host closure once on a `Var` node. The
/// closure runs exactly once per recording, so recording an expression
/// with side effects in its host closures replays those effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Builder;

impl Backend for Builder {
    type Repr<A: Clone + 'static> = Quoted<A>;
}

impl FuncOps for Builder {
    fn lam<A, B, F>(&self, body: F) -> Quoted<HostFn<A, B>>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(Quoted<A>) -> Quoted<B> + 'static,
    {
        let param = names::fresh("x");
        let tree = body(Quoted::new(Expr::Var {
            name: param.clone(),
        }))
        .into_expr();
        Quoted::new(Expr::Lam {
            param,
            body: Box::new(tree),
        })
    }

    fn app<A, B>(&self, func: Quoted<HostFn<A, B>>, arg: Quoted<A>) -> Quoted<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        Quoted::new(Expr::App {
            func: Box::new(func.into_expr()),
            arg: Box::new(arg.into_expr()),
        })
    }
}

impl ArithOps for Builder {
    fn int(&self, value: i64) -> Quoted<i64> {
        Quoted::new(Expr::Lit {
            value: Lit::Int(value),
        })
    }

    fn plus(&self, lhs: Quoted<i64>, rhs: Quoted<i64>) -> Quoted<i64> {
        op2(ops::PLUS, lhs, rhs)
    }

    fn minus(&self, lhs: Quoted<i64>, rhs: Quoted<i64>) -> Quoted<i64> {
        op2(ops::MINUS, lhs, rhs)
    }

    fn times(&self, lhs: Quoted<i64>, rhs: Quoted<i64>) -> Quoted<i64> {
        op2(ops::TIMES, lhs, rhs)
    }
}

impl BoolOps for Builder {
    fn bool(&self, value: bool) -> Quoted<bool> {
        Quoted::new(Expr::Lit {
            value: Lit::Bool(value),
        })
    }

    fn and(&self, lhs: Quoted<bool>, rhs: Quoted<bool>) -> Quoted<bool> {
        op2(ops::AND, lhs, rhs)
    }

    fn or(&self, lhs: Quoted<bool>, rhs: Quoted<bool>) -> Quoted<bool> {
        op2(ops::OR, lhs, rhs)
    }

    fn not(&self, value: Quoted<bool>) -> Quoted<bool> {
        op1(ops::NOT, value)
    }

    fn cond<A>(&self, guard: Quoted<bool>, then: Quoted<A>, otherwise: Quoted<A>) -> Quoted<A>
    where
        A: Clone + 'static,
    {
        op3(ops::COND, guard, then, otherwise)
    }
}

impl ListOps for Builder {
    fn map<A, B, F>(&self, list: Quoted<Vec<A>>, f: F) -> Quoted<Vec<B>>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(Quoted<A>) -> Quoted<B> + 'static,
    {
        let param = names::fresh("x");
        let body = f(Quoted::new(Expr::Var {
            name: param.clone(),
        }))
        .into_expr();
        Quoted::new(Expr::OpApp {
            op: ops::MAP.to_string(),
            args: vec![
                list.into_expr(),
                Expr::Lam {
                    param,
                    body: Box::new(body),
                },
            ],
        })
    }

    fn fold<A, B, F>(&self, list: Quoted<Vec<A>>, init: Quoted<B>, f: F) -> Quoted<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: Fn(Quoted<B>, Quoted<A>) -> Quoted<B> + 'static,
    {
        let acc = names::fresh("acc");
        let elem = names::fresh("x");
        let body = f(
            Quoted::new(Expr::Var { name: acc.clone() }),
            Quoted::new(Expr::Var { name: elem.clone() }),
        )
        .into_expr();
        // The recorded function is curried, accumulator first, matching
        // how a consumer applies it one argument at a time.
        Quoted::new(Expr::OpApp {
            op: ops::FOLD.to_string(),
            args: vec![
                list.into_expr(),
                init.into_expr(),
                Expr::Lam {
                    param: acc,
                    body: Box::new(Expr::Lam {
                        param: elem,
                        body: Box::new(body),
                    }),
                },
            ],
        })
    }
}

impl ConsoleOps for Builder {
    fn text(&self, value: &str) -> Quoted<String> {
        Quoted::new(Expr::Lit {
            value: Lit::Text(value.to_string()),
        })
    }

    // Each read is named by its invocation index, so replaying the tree
    // can bind the n-th read's result by name.
    fn read_line(&self) -> Quoted<String> {
        Quoted::new(Expr::Var {
            name: names::fresh(ops::READ_LINE_PREFIX),
        })
    }

    fn print_line(&self, line: Quoted<String>) -> Quoted<()> {
        op1(ops::PRINT_LINE, line)
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
