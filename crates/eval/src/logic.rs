//! Boolean vocabulary: literals, connectives and conditional selection.

use reprise_interchange::{ops, Expr};

use crate::engine::reconstruct;
use crate::resolver::{literal_at, Reconstructor, Resolver};
use crate::types::{FuncValue, TypeSpec, Value};

/// Rebuilds boolean literals, `and`/`or`/`not` at `bool`, and `cond` at
/// any target type. Bare references to the connectives (and to `cond`,
/// when the requested type spells out its shape) become curried
/// functions.
pub struct BoolReconstructor;

impl Reconstructor for BoolReconstructor {
    fn resolve(&self, ty: &TypeSpec, expr: &Expr, root: &Resolver) -> Option<Value> {
        if let Some(value) = literal_at(ty, expr) {
            return Some(value);
        }
        match expr {
            Expr::OpApp { op, args } if op == ops::COND => {
                if args.len() != 3 {
                    return None;
                }
                let guard = reconstruct(&TypeSpec::bool(), &args[0], root)
                    .ok()?
                    .into_bool()
                    .ok()?;
                // Both branches must rebuild at the target type. The
                // direct evaluator is strict, so a broken dead branch
                // is a failure there too; selection happens last.
                let then = reconstruct(ty, &args[1], root).ok()?;
                let otherwise = reconstruct(ty, &args[2], root).ok()?;
                Some(if guard { then } else { otherwise })
            }
            Expr::OpApp { op, args } if op == ops::NOT => {
                if *ty != TypeSpec::bool() || args.len() != 1 {
                    return None;
                }
                let value = reconstruct(ty, &args[0], root).ok()?.into_bool().ok()?;
                Some(Value::Bool(!value))
            }
            Expr::OpApp { op, args } => {
                let f = bool_fn(op)?;
                if *ty != TypeSpec::bool() || args.len() != 2 {
                    return None;
                }
                let lhs = reconstruct(ty, &args[0], root).ok()?.into_bool().ok()?;
                let rhs = reconstruct(ty, &args[1], root).ok()?.into_bool().ok()?;
                Some(Value::Bool(f(lhs, rhs)))
            }
            Expr::OpRef { id } if id == ops::NOT => {
                if *ty == unary_bool_type() {
                    Some(curried_not())
                } else {
                    None
                }
            }
            Expr::OpRef { id } if id == ops::COND => curried_cond(ty),
            Expr::OpRef { id } => {
                let f = bool_fn(id)?;
                if *ty == binary_bool_type() {
                    Some(curried(f))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn operator_type(&self, id: &str) -> Option<TypeSpec> {
        if id == ops::NOT {
            Some(unary_bool_type())
        } else {
            bool_fn(id).map(|_| binary_bool_type())
        }
    }
}

fn bool_fn(op: &str) -> Option<fn(bool, bool) -> bool> {
    match op {
        ops::AND => Some(|a, b| a && b),
        ops::OR => Some(|a, b| a || b),
        _ => None,
    }
}

/// `(bool -> (bool -> bool))`
fn binary_bool_type() -> TypeSpec {
    TypeSpec::func(
        TypeSpec::bool(),
        TypeSpec::func(TypeSpec::bool(), TypeSpec::bool()),
    )
}

/// `(bool -> bool)`
fn unary_bool_type() -> TypeSpec {
    TypeSpec::func(TypeSpec::bool(), TypeSpec::bool())
}

fn curried(f: fn(bool, bool) -> bool) -> Value {
    Value::Func(FuncValue::new(move |a: Value| {
        let a = a.into_bool()?;
        Ok(Value::Func(FuncValue::new(move |b: Value| {
            let b = b.into_bool()?;
            Ok(Value::Bool(f(a, b)))
        })))
    }))
}

fn curried_not() -> Value {
    Value::Func(FuncValue::new(|v: Value| Ok(Value::Bool(!v.into_bool()?))))
}

/// `cond` as a value needs its branch type spelled out by the caller:
/// the reference only rebuilds at `(bool -> (t -> (t -> t)))`.
fn curried_cond(ty: &TypeSpec) -> Option<Value> {
    let TypeSpec::Func { arg: g, result: r1 } = ty else {
        return None;
    };
    if **g != TypeSpec::bool() {
        return None;
    }
    let TypeSpec::Func { arg: t1, result: r2 } = r1.as_ref() else {
        return None;
    };
    let TypeSpec::Func { arg: t2, result: t3 } = r2.as_ref() else {
        return None;
    };
    if t1 != t2 || t1 != t3 {
        return None;
    }
    Some(Value::Func(FuncValue::new(move |guard: Value| {
        let guard = guard.into_bool()?;
        Ok(Value::Func(FuncValue::new(move |then: Value| {
            Ok(Value::Func(FuncValue::new(move |otherwise: Value| {
                Ok(if guard { then.clone() } else { otherwise })
            })))
        })))
    })))
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
