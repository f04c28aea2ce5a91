//! reprise-eval: Type-directed reconstruction of serialized expressions.
//!
//! The reconstructor consumes untyped interchange trees (not the typed
//! embedding), so a consumer needs nothing from the crate that built a
//! tree. Given a tree and a caller-supplied [`TypeSpec`], the engine
//! rebuilds a runtime [`Value`], rebuilding function-typed trees into
//! host-callable closures.
//!
//! Dispatch is a chain of vocabulary [`Reconstructor`]s behind a
//! [`Resolver`]; [`Resolver::standard()`] wires up arithmetic, boolean
//! logic and list operations. Failures are classified, never fatal:
//! see [`ReconstructError`].

pub mod arith;
pub mod engine;
pub mod list;
pub mod logic;
pub mod resolver;
pub mod types;

pub use arith::ArithReconstructor;
pub use engine::reconstruct;
pub use list::ListReconstructor;
pub use logic::BoolReconstructor;
pub use resolver::{Reconstructor, Resolver};
pub use types::{FuncValue, ReconstructError, TypeSpec, Value};

// ──────────────────────────────────────────────
// Integration tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod integration_tests {
    use super::*;
    use reprise_interchange::from_value;

    /// End-to-end test over a hand-written wire tree: parse, rebuild at
    /// `(int -> int)`, call.
    #[test]
    fn wire_tree_to_callable_function() {
        let wire = serde_json::json!({
            "kind": "lam",
            "param": "x0",
            "body": {
                "kind": "op_app",
                "op": "plus",
                "args": [
                    {
                        "kind": "op_app",
                        "op": "times",
                        "args": [
                            {"kind": "var", "name": "x0"},
                            {"kind": "lit", "value": {"kind": "int", "value": 5}}
                        ]
                    },
                    {"kind": "lit", "value": {"kind": "int", "value": 6}}
                ]
            }
        });
        let tree = from_value(&wire).unwrap();
        let ty = TypeSpec::func(TypeSpec::int(), TypeSpec::int());
        let f = reconstruct(&ty, &tree, &Resolver::standard())
            .unwrap()
            .into_func()
            .unwrap();
        assert_eq!(f.call(Value::Int(2)).unwrap(), Value::Int(16));
        assert_eq!(f.call(Value::Int(0)).unwrap(), Value::Int(6));
    }

    /// Vocabularies chain: a conditional guarded by boolean connectives
    /// selecting between arithmetic results.
    #[test]
    fn wire_tree_mixing_vocabularies() {
        let wire = serde_json::json!({
            "kind": "lam",
            "param": "b0",
            "body": {
                "kind": "op_app",
                "op": "cond",
                "args": [
                    {
                        "kind": "op_app",
                        "op": "and",
                        "args": [
                            {"kind": "var", "name": "b0"},
                            {"kind": "lit", "value": {"kind": "bool", "value": true}}
                        ]
                    },
                    {
                        "kind": "op_app",
                        "op": "plus",
                        "args": [
                            {"kind": "lit", "value": {"kind": "int", "value": 1}},
                            {"kind": "lit", "value": {"kind": "int", "value": 2}}
                        ]
                    },
                    {"kind": "lit", "value": {"kind": "int", "value": 9}}
                ]
            }
        });
        let tree = from_value(&wire).unwrap();
        let ty = TypeSpec::func(TypeSpec::bool(), TypeSpec::int());
        let f = reconstruct(&ty, &tree, &Resolver::standard())
            .unwrap()
            .into_func()
            .unwrap();
        assert_eq!(f.call(Value::Bool(true)).unwrap(), Value::Int(3));
        assert_eq!(f.call(Value::Bool(false)).unwrap(), Value::Int(9));
    }

    /// The same wire tree rebuilds at different compatible descriptors.
    #[test]
    fn identity_tree_rebuilds_at_several_types() {
        let wire = serde_json::json!({
            "kind": "lam",
            "param": "x0",
            "body": {"kind": "var", "name": "x0"}
        });
        let tree = from_value(&wire).unwrap();

        let at_int = TypeSpec::func(TypeSpec::int(), TypeSpec::int());
        let f = reconstruct(&at_int, &tree, &Resolver::standard())
            .unwrap()
            .into_func()
            .unwrap();
        assert_eq!(f.call(Value::Int(2)).unwrap(), Value::Int(2));

        let at_text = TypeSpec::func(TypeSpec::text(), TypeSpec::text());
        let f = reconstruct(&at_text, &tree, &Resolver::standard())
            .unwrap()
            .into_func()
            .unwrap();
        assert_eq!(
            f.call(Value::Text("hi".to_string())).unwrap(),
            Value::Text("hi".to_string())
        );
    }

    /// Recorded console programs are serializable but not runnable:
    /// their synthetic reads surface as unbound variables and their
    /// prints as unknown operators.
    #[test]
    fn console_trees_fail_gracefully() {
        let read = from_value(&serde_json::json!({
            "kind": "var", "name": "_result_readLn_0"
        }))
        .unwrap();
        let err = reconstruct(&TypeSpec::text(), &read, &Resolver::standard()).unwrap_err();
        assert_eq!(
            err,
            ReconstructError::UnboundVariable {
                name: "_result_readLn_0".to_string()
            }
        );

        let print = from_value(&serde_json::json!({
            "kind": "op_app",
            "op": "printLn",
            "args": [{"kind": "lit", "value": {"kind": "text", "value": "hi"}}]
        }))
        .unwrap();
        let err = reconstruct(&TypeSpec::text(), &print, &Resolver::standard()).unwrap_err();
        assert_eq!(
            err,
            ReconstructError::UnknownOperator {
                id: "printLn".to_string()
            }
        );
    }
}
