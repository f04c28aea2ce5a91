//! Integer arithmetic vocabulary.

use reprise_interchange::{ops, Expr};

use crate::engine::reconstruct;
use crate::resolver::{literal_at, Reconstructor, Resolver};
use crate::types::{FuncValue, TypeSpec, Value};

/// Rebuilds integer literals, `plus`/`minus`/`times` applications at
/// `int`, and bare references to those operators as curried functions.
pub struct ArithReconstructor;

impl Reconstructor for ArithReconstructor {
    fn resolve(&self, ty: &TypeSpec, expr: &Expr, root: &Resolver) -> Option<Value> {
        if let Some(value) = literal_at(ty, expr) {
            return Some(value);
        }
        match expr {
            Expr::OpApp { op, args } => {
                let f = arith_fn(op)?;
                if *ty != TypeSpec::int() || args.len() != 2 {
                    return None;
                }
                let lhs = reconstruct(ty, &args[0], root).ok()?.into_int().ok()?;
                let rhs = reconstruct(ty, &args[1], root).ok()?.into_int().ok()?;
                Some(Value::Int(f(lhs, rhs)))
            }
            Expr::OpRef { id } => {
                let f = arith_fn(id)?;
                if *ty == binary_int_type() {
                    Some(curried(f))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn operator_type(&self, id: &str) -> Option<TypeSpec> {
        arith_fn(id).map(|_| binary_int_type())
    }
}

// Overflow wraps, matching the Evaluator. Reconstruction never panics
// on any operand pair a tree can carry.
fn arith_fn(op: &str) -> Option<fn(i64, i64) -> i64> {
    match op {
        ops::PLUS => Some(i64::wrapping_add),
        ops::MINUS => Some(i64::wrapping_sub),
        ops::TIMES => Some(i64::wrapping_mul),
        _ => None,
    }
}

/// `(int -> (int -> int))`
fn binary_int_type() -> TypeSpec {
    TypeSpec::func(
        TypeSpec::int(),
        TypeSpec::func(TypeSpec::int(), TypeSpec::int()),
    )
}

fn curried(f: fn(i64, i64) -> i64) -> Value {
    Value::Func(FuncValue::new(move |a: Value| {
        let a = a.into_int()?;
        Ok(Value::Func(FuncValue::new(move |b: Value| {
            let b = b.into_int()?;
            Ok(Value::Int(f(a, b)))
        })))
    }))
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
