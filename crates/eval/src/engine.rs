//! The reconstruction engine.
//!
//! [`reconstruct`] turns an untyped tree plus a caller-supplied type
//! descriptor into a runtime value. The resolver chain is consulted
//! first for every node; the engine itself only knows lambda,
//! application and the failure taxonomy. Nothing here is fatal: a tree
//! that cannot be rebuilt at the requested type reports which of the
//! four failure kinds it hit.

use reprise_interchange::Expr;

use crate::resolver::Resolver;
use crate::types::{FuncValue, ReconstructError, TypeSpec, Value};

/// Rebuild a typed value from an untyped tree.
pub fn reconstruct(
    ty: &TypeSpec,
    expr: &Expr,
    resolver: &Resolver,
) -> Result<Value, ReconstructError> {
    if let Some(value) = resolver.resolve(ty, expr) {
        return Ok(value);
    }
    match expr {
        Expr::Var { name } => Err(ReconstructError::UnboundVariable { name: name.clone() }),
        Expr::Lam { param, body } => match ty {
            TypeSpec::Func { arg, result } => {
                let param = param.clone();
                let body = (**body).clone();
                let arg_ty = (**arg).clone();
                let result_ty = (**result).clone();
                let captured = resolver.clone();
                // The body is rebuilt per call under one extra binding
                // layer; the layer order makes the innermost binding of
                // a reused name the one that wins.
                Ok(Value::Func(FuncValue::new(move |value: Value| {
                    let inner = captured.bind(&param, arg_ty.clone(), value);
                    reconstruct(&result_ty, &body, &inner)
                })))
            }
            other => Err(ReconstructError::TypeMismatch {
                expected: other.to_string(),
                found: "function literal".to_string(),
            }),
        },
        Expr::App { func, arg } => {
            let (arg_ty, func_ty) = application_types(ty, func, arg, resolver)?;
            let func_value = reconstruct(&func_ty, func, resolver)?.into_func()?;
            let arg_value = reconstruct(&arg_ty, arg, resolver)?;
            func_value.call(arg_value)
        }
        Expr::Lit { value } => match ty {
            TypeSpec::Atom(expected) => Err(ReconstructError::LiteralKindMismatch {
                expected: *expected,
                found: value.kind(),
            }),
            other => Err(ReconstructError::TypeMismatch {
                expected: other.to_string(),
                found: format!("{} literal", value.kind()),
            }),
        },
        Expr::OpRef { id } => Err(ReconstructError::UnknownOperator { id: id.clone() }),
        Expr::OpApp { op, .. } => Err(ReconstructError::UnknownOperator { id: op.clone() }),
    }
}

/// Decide the argument type (and with it the function type) for an
/// application at target type `ty`. The function side is synthesized
/// first; failing that, the argument side. An application where neither
/// side carries enough type information is rejected.
fn application_types(
    ty: &TypeSpec,
    func: &Expr,
    arg: &Expr,
    resolver: &Resolver,
) -> Result<(TypeSpec, TypeSpec), ReconstructError> {
    if let Some(synth) = synthesize(func, resolver) {
        return match synth {
            TypeSpec::Func { arg: in_ty, result } => {
                if *result == *ty {
                    Ok(((*in_ty).clone(), TypeSpec::Func { arg: in_ty, result }))
                } else {
                    Err(ReconstructError::TypeMismatch {
                        expected: ty.to_string(),
                        found: result.to_string(),
                    })
                }
            }
            other => Err(ReconstructError::TypeMismatch {
                expected: format!("function returning {}", ty),
                found: other.to_string(),
            }),
        };
    }
    if let Some(arg_ty) = synthesize(arg, resolver) {
        let func_ty = TypeSpec::func(arg_ty.clone(), ty.clone());
        return Ok((arg_ty, func_ty));
    }
    Err(ReconstructError::TypeMismatch {
        expected: format!("function returning {}", ty),
        found: "application with no synthesizable side".to_string(),
    })
}

/// Best-effort bottom-up typing of a node, used only to type the two
/// sides of an application. `None` means the node does not carry enough
/// information on its own; notably lambda literals and applications of
/// polymorphic operators never synthesize.
pub(crate) fn synthesize(expr: &Expr, resolver: &Resolver) -> Option<TypeSpec> {
    match expr {
        Expr::Var { name } => resolver.binding_type(name),
        Expr::OpRef { id } => resolver.operator_type(id),
        Expr::Lit { value } => Some(TypeSpec::Atom(value.kind())),
        Expr::OpApp { op, args } => {
            // An operator application has the operator's declared type
            // with one arrow peeled per supplied argument.
            let mut ty = resolver.operator_type(op)?;
            for _ in args {
                match ty {
                    TypeSpec::Func { result, .. } => ty = *result,
                    _ => return None,
                }
            }
            Some(ty)
        }
        Expr::App { func, .. } => match synthesize(func, resolver)? {
            TypeSpec::Func { result, .. } => Some(*result),
            _ => None,
        },
        Expr::Lam { .. } => None,
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
