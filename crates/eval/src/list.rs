//! List vocabulary: map and fold over reconstructed lists.
//!
//! Trees have no list literal node; a list only ever enters through a
//! binding, so the element type is synthesized from the list argument
//! (a bound variable, in practice). A list argument nothing can type
//! makes this vocabulary decline rather than guess.

use reprise_interchange::{ops, Expr};

use crate::engine::{reconstruct, synthesize};
use crate::resolver::{Reconstructor, Resolver};
use crate::types::{TypeSpec, Value};

/// Rebuilds `map` applications at `[b]` and `fold` applications at any
/// target type, synthesizing the element type from the list argument.
pub struct ListReconstructor;

impl Reconstructor for ListReconstructor {
    fn resolve(&self, ty: &TypeSpec, expr: &Expr, root: &Resolver) -> Option<Value> {
        match expr {
            Expr::OpApp { op, args } if op == ops::MAP => {
                if args.len() != 2 {
                    return None;
                }
                let TypeSpec::List { element: out_elem } = ty else {
                    return None;
                };
                let list_ty = synthesize(&args[0], root)?;
                let TypeSpec::List { element: in_elem } = &list_ty else {
                    return None;
                };
                let func_ty = TypeSpec::func((**in_elem).clone(), (**out_elem).clone());
                let items = reconstruct(&list_ty, &args[0], root).ok()?.into_list().ok()?;
                let f = reconstruct(&func_ty, &args[1], root).ok()?.into_func().ok()?;
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(f.call(item).ok()?);
                }
                Some(Value::List(out))
            }
            Expr::OpApp { op, args } if op == ops::FOLD => {
                if args.len() != 3 {
                    return None;
                }
                let list_ty = synthesize(&args[0], root)?;
                let TypeSpec::List { element } = &list_ty else {
                    return None;
                };
                // The recorded function is curried, accumulator first:
                // its type is (target -> (element -> target)).
                let func_ty = TypeSpec::func(
                    ty.clone(),
                    TypeSpec::func((**element).clone(), ty.clone()),
                );
                let items = reconstruct(&list_ty, &args[0], root).ok()?.into_list().ok()?;
                let mut acc = reconstruct(ty, &args[1], root).ok()?;
                let f = reconstruct(&func_ty, &args[2], root).ok()?.into_func().ok()?;
                for item in items {
                    acc = f.call(acc).ok()?.into_func().ok()?.call(item).ok()?;
                }
                Some(acc)
            }
            _ => None,
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
