//! The reconstructor capability trait and the dispatch chain.
//!
//! Reconstruction is open recursion: the engine never calls a
//! vocabulary directly, it asks the active [`Resolver`], and every
//! vocabulary recurses through the same handle. Lambda invocation
//! extends the chain with one binding layer per bound name, which is
//! how variables resolve without any ambient environment.

use std::rc::Rc;

use reprise_interchange::{Atom, Expr, Lit};

use crate::types::{TypeSpec, Value};

/// One vocabulary's contribution to reconstruction.
pub trait Reconstructor {
    /// Try to rebuild `expr` at type `ty`. `None` means "not mine",
    /// letting the next layer in the chain try; any internal failure is
    /// also `None`. Recursive work must go through `root`, never into a
    /// vocabulary directly, so that binding layers stay in effect
    /// inside subtrees.
    fn resolve(&self, ty: &TypeSpec, expr: &Expr, root: &Resolver) -> Option<Value>;

    /// The closed type of a named operator, if this vocabulary owns one
    /// by that name. Feeds application argument typing in the engine;
    /// polymorphic operators stay `None`.
    fn operator_type(&self, _id: &str) -> Option<TypeSpec> {
        None
    }

    /// The declared type of a bound variable, if this layer binds it.
    fn binding_type(&self, _name: &str) -> Option<TypeSpec> {
        None
    }
}

/// The active dispatcher: a chain of reconstructors consulted first to
/// last, first success winning. Cloning is cheap, and extending never
/// mutates an existing chain, so captured resolvers stay stable.
#[derive(Clone)]
pub struct Resolver {
    layers: Rc<Vec<Rc<dyn Reconstructor>>>,
}

impl Resolver {
    /// A resolver over the given layers, consulted in order.
    pub fn new(layers: Vec<Rc<dyn Reconstructor>>) -> Resolver {
        Resolver {
            layers: Rc::new(layers),
        }
    }

    /// The standard vocabulary set: arithmetic, boolean logic and list
    /// operations, consulted in that order.
    pub fn standard() -> Resolver {
        Resolver::new(vec![
            Rc::new(crate::arith::ArithReconstructor),
            Rc::new(crate::logic::BoolReconstructor),
            Rc::new(crate::list::ListReconstructor),
        ])
    }

    pub fn resolve(&self, ty: &TypeSpec, expr: &Expr) -> Option<Value> {
        self.layers
            .iter()
            .find_map(|layer| layer.resolve(ty, expr, self))
    }

    pub fn operator_type(&self, id: &str) -> Option<TypeSpec> {
        self.layers.iter().find_map(|layer| layer.operator_type(id))
    }

    pub fn binding_type(&self, name: &str) -> Option<TypeSpec> {
        self.layers.iter().find_map(|layer| layer.binding_type(name))
    }

    /// Extend with one binding layer for `name`. The new layer sits in
    /// front of everything already chained, so the innermost binding of
    /// a name always wins.
    pub fn bind(&self, name: &str, ty: TypeSpec, value: Value) -> Resolver {
        let mut layers: Vec<Rc<dyn Reconstructor>> = Vec::with_capacity(self.layers.len() + 1);
        layers.push(Rc::new(Binding {
            name: name.to_string(),
            ty,
            value,
        }));
        layers.extend(self.layers.iter().cloned());
        Resolver {
            layers: Rc::new(layers),
        }
    }
}

/// A lambda-invocation binding: name, declared type, bound value.
struct Binding {
    name: String,
    ty: TypeSpec,
    value: Value,
}

impl Reconstructor for Binding {
    // Interception is by name alone. The value was already built at the
    // declared type when the enclosing function was applied, so the
    // requested type is not re-checked here.
    fn resolve(&self, _ty: &TypeSpec, expr: &Expr, _root: &Resolver) -> Option<Value> {
        match expr {
            Expr::Var { name } if *name == self.name => Some(self.value.clone()),
            _ => None,
        }
    }

    fn binding_type(&self, name: &str) -> Option<TypeSpec> {
        if name == self.name {
            Some(self.ty.clone())
        } else {
            None
        }
    }
}

/// A literal at a matching atomic type. Shared by the vocabularies that
/// own atomic kinds; the first one in the chain handles every literal,
/// but each vocabulary stays complete on its own.
pub(crate) fn literal_at(ty: &TypeSpec, expr: &Expr) -> Option<Value> {
    let TypeSpec::Atom(expected) = ty else {
        return None;
    };
    let Expr::Lit { value } = expr else {
        return None;
    };
    match (expected, value) {
        (Atom::Int, Lit::Int(v)) => Some(Value::Int(*v)),
        (Atom::Bool, Lit::Bool(b)) => Some(Value::Bool(*b)),
        (Atom::Text, Lit::Text(s)) => Some(Value::Text(s.clone())),
        _ => None,
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
