//! Untyped expression trees.
//!
//! An [`Expr`] is the serializable form of an expression: every typed
//! surface construct lowers to one of six node kinds, and the tree keeps
//! no type information beyond what literals carry about themselves.
//! Reconstruction back into a typed value is driven entirely by a
//! caller-supplied type descriptor, so the tree itself stays small and
//! host-independent.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The atomic payload kinds a literal (and an atomic type) can have.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Atom {
    Int,
    Bool,
    Text,
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Int => f.write_str("int"),
            Atom::Bool => f.write_str("bool"),
            Atom::Text => f.write_str("text"),
        }
    }
}

/// A self-describing atomic literal payload.
///
/// Serialized as `{"kind": "int", "value": 5}` and so on; the kind tag is
/// what lets a decoder check a literal against an expected atomic type
/// without any surrounding context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Lit {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl Lit {
    /// The atomic kind this payload carries.
    pub fn kind(&self) -> Atom {
        match self {
            Lit::Int(_) => Atom::Int,
            Lit::Bool(_) => Atom::Bool,
            Lit::Text(_) => Atom::Text,
        }
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lit::Int(v) => write!(f, "{v}"),
            Lit::Bool(b) => write!(f, "{b}"),
            Lit::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// One node of an untyped expression tree.
///
/// Trees are immutable once built. `Lam` parameters are drawn from a
/// fresh-name generator at build time, so within one builder run no
/// binder accidentally captures another's variable; nothing here relies
/// on that beyond readability, since resolution is lexical.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expr {
    /// Reference to a lexically bound variable.
    Var { name: String },
    /// Function literal binding `param` within `body`.
    Lam { param: String, body: Box<Expr> },
    /// Application of a function-valued node to one argument.
    App { func: Box<Expr>, arg: Box<Expr> },
    /// Fixed-arity application of a named vocabulary operator.
    OpApp { op: String, args: Vec<Expr> },
    /// A bare operator name used as a first-class (curried) value.
    OpRef { id: String },
    /// An atomic literal.
    Lit { value: Lit },
}

impl Expr {
    /// Whether the tree references `name` anywhere outside the given
    /// shadowing list. Each `Lam` adds its own parameter to the list for
    /// its body, so a reference under a rebinding of `name` does not
    /// count.
    pub fn contains_var(&self, name: &str, shadowed: &[&str]) -> bool {
        match self {
            Expr::Var { name: n } => n == name && !shadowed.contains(&n.as_str()),
            Expr::Lam { param, body } => {
                let mut inner = shadowed.to_vec();
                inner.push(param.as_str());
                body.contains_var(name, &inner)
            }
            Expr::App { func, arg } => {
                func.contains_var(name, shadowed) || arg.contains_var(name, shadowed)
            }
            Expr::OpApp { args, .. } => args.iter().any(|a| a.contains_var(name, shadowed)),
            Expr::OpRef { .. } | Expr::Lit { .. } => false,
        }
    }

    /// Every variable name mentioned in the tree, free and bound alike,
    /// including `Lam` parameters.
    pub fn var_names(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_var_names(&mut out);
        out
    }

    fn collect_var_names(&self, out: &mut BTreeSet<String>) {
        match self {
            Expr::Var { name } => {
                out.insert(name.clone());
            }
            Expr::Lam { param, body } => {
                out.insert(param.clone());
                body.collect_var_names(out);
            }
            Expr::App { func, arg } => {
                func.collect_var_names(out);
                arg.collect_var_names(out);
            }
            Expr::OpApp { args, .. } => {
                for a in args {
                    a.collect_var_names(out);
                }
            }
            Expr::OpRef { .. } | Expr::Lit { .. } => {}
        }
    }
}

/// Compact single-line rendering, s-expression style. Diagnostic only;
/// the JSON codec is the faithful form.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var { name } => f.write_str(name),
            Expr::Lam { param, body } => write!(f, "(lam {param} {body})"),
            Expr::App { func, arg } => write!(f, "({func} {arg})"),
            Expr::OpApp { op, args } => {
                write!(f, "({op}")?;
                for a in args {
                    write!(f, " {a}")?;
                }
                f.write_str(")")
            }
            Expr::OpRef { id } => f.write_str(id),
            Expr::Lit { value } => write!(f, "{value}"),
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn affine_tree() -> Expr {
        // (lam x0 (plus (times x0 5) 6))
        Expr::Lam {
            param: "x0".to_string(),
            body: Box::new(Expr::OpApp {
                op: "plus".to_string(),
                args: vec![
                    Expr::OpApp {
                        op: "times".to_string(),
                        args: vec![
                            Expr::Var {
                                name: "x0".to_string(),
                            },
                            Expr::Lit {
                                value: Lit::Int(5),
                            },
                        ],
                    },
                    Expr::Lit {
                        value: Lit::Int(6),
                    },
                ],
            }),
        }
    }

    #[test]
    fn serde_shape_var_lam_app() {
        let tree = Expr::App {
            func: Box::new(Expr::Lam {
                param: "x0".to_string(),
                body: Box::new(Expr::Var {
                    name: "x0".to_string(),
                }),
            }),
            arg: Box::new(Expr::Lit {
                value: Lit::Int(2),
            }),
        };
        let encoded = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            encoded,
            json!({
                "kind": "app",
                "func": {
                    "kind": "lam",
                    "param": "x0",
                    "body": {"kind": "var", "name": "x0"}
                },
                "arg": {"kind": "lit", "value": {"kind": "int", "value": 2}}
            })
        );
        let decoded: Expr = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, tree);
    }

    #[test]
    fn serde_shape_op_app_and_ref() {
        let tree = Expr::OpApp {
            op: "and".to_string(),
            args: vec![
                Expr::Lit {
                    value: Lit::Bool(true),
                },
                Expr::OpRef {
                    id: "not".to_string(),
                },
            ],
        };
        let encoded = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            encoded,
            json!({
                "kind": "op_app",
                "op": "and",
                "args": [
                    {"kind": "lit", "value": {"kind": "bool", "value": true}},
                    {"kind": "op_ref", "id": "not"}
                ]
            })
        );
    }

    #[test]
    fn serde_shape_text_literal() {
        let tree = Expr::Lit {
            value: Lit::Text("hello".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!({"kind": "lit", "value": {"kind": "text", "value": "hello"}})
        );
    }

    #[test]
    fn contains_var_sees_free_references() {
        let tree = affine_tree();
        assert!(tree.contains_var("x0", &[]));
        assert!(!tree.contains_var("y", &[]));
    }

    #[test]
    fn contains_var_respects_shadow_list() {
        let tree = Expr::Var {
            name: "x0".to_string(),
        };
        assert!(tree.contains_var("x0", &[]));
        assert!(!tree.contains_var("x0", &["x0"]));
    }

    #[test]
    fn contains_var_skips_rebound_names() {
        // (lam y (lam x0 x0)): the inner x0 is bound by the inner lam,
        // so the tree has no reference to an outer x0.
        let tree = Expr::Lam {
            param: "y".to_string(),
            body: Box::new(Expr::Lam {
                param: "x0".to_string(),
                body: Box::new(Expr::Var {
                    name: "x0".to_string(),
                }),
            }),
        };
        assert!(!tree.contains_var("x0", &[]));
        assert!(!tree.contains_var("y", &[]));
    }

    #[test]
    fn var_names_collects_params_and_references() {
        let tree = Expr::Lam {
            param: "a".to_string(),
            body: Box::new(Expr::App {
                func: Box::new(Expr::Var {
                    name: "f".to_string(),
                }),
                arg: Box::new(Expr::Var {
                    name: "a".to_string(),
                }),
            }),
        };
        let names: Vec<String> = tree.var_names().into_iter().collect();
        assert_eq!(names, vec!["a".to_string(), "f".to_string()]);
    }

    #[test]
    fn display_renders_s_expression() {
        assert_eq!(affine_tree().to_string(), "(lam x0 (plus (times x0 5) 6))");
        let text = Expr::Lit {
            value: Lit::Text("hi".to_string()),
        };
        assert_eq!(text.to_string(), "\"hi\"");
    }
}
