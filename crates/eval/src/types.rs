//! Runtime values, type descriptors and the reconstruction error.
//!
//! These types are distinct from the typed embedding in reprise-core.
//! Reconstruction consumes untyped interchange trees, so everything a
//! caller gets back is expressed in this small closed value model, and
//! the shape it gets is decided by the [`TypeSpec`] it supplied.

use std::fmt;
use std::rc::Rc;

use reprise_interchange::Atom;

// ──────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────

/// Errors that can occur while rebuilding a typed value from a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconstructError {
    /// A variable had no enclosing binder.
    UnboundVariable { name: String },
    /// The tree cannot have the requested type.
    TypeMismatch { expected: String, found: String },
    /// No reconstructor in the chain claimed an operator node.
    UnknownOperator { id: String },
    /// A literal's own kind disagrees with the requested atomic type.
    LiteralKindMismatch { expected: Atom, found: Atom },
}

impl fmt::Display for ReconstructError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconstructError::UnboundVariable { name } => {
                write!(f, "unbound variable: {}", name)
            }
            ReconstructError::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {}, found {}", expected, found)
            }
            ReconstructError::UnknownOperator { id } => {
                write!(f, "unknown operator: {}", id)
            }
            ReconstructError::LiteralKindMismatch { expected, found } => {
                write!(
                    f,
                    "literal kind mismatch: expected {}, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for ReconstructError {}

// ──────────────────────────────────────────────
// Type descriptors
// ──────────────────────────────────────────────

/// A type descriptor supplied by the caller to drive reconstruction.
///
/// Descriptors are plain data and cheap to clone; the pipeline never
/// persists them. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpec {
    Atom(Atom),
    Func {
        arg: Box<TypeSpec>,
        result: Box<TypeSpec>,
    },
    List {
        element: Box<TypeSpec>,
    },
}

impl TypeSpec {
    pub fn int() -> TypeSpec {
        TypeSpec::Atom(Atom::Int)
    }

    pub fn bool() -> TypeSpec {
        TypeSpec::Atom(Atom::Bool)
    }

    pub fn text() -> TypeSpec {
        TypeSpec::Atom(Atom::Text)
    }

    pub fn func(arg: TypeSpec, result: TypeSpec) -> TypeSpec {
        TypeSpec::Func {
            arg: Box::new(arg),
            result: Box::new(result),
        }
    }

    pub fn list(element: TypeSpec) -> TypeSpec {
        TypeSpec::List {
            element: Box::new(element),
        }
    }

    /// Parse a descriptor from kind-tagged JSON, e.g.
    /// `{"kind": "func", "arg": {"kind": "int"}, "result": {"kind": "int"}}`.
    /// Returns `None` for anything that is not a well-formed descriptor.
    pub fn from_json(value: &serde_json::Value) -> Option<TypeSpec> {
        let obj = value.as_object()?;
        match obj.get("kind")?.as_str()? {
            "int" => Some(TypeSpec::int()),
            "bool" => Some(TypeSpec::bool()),
            "text" => Some(TypeSpec::text()),
            "func" => {
                let arg = TypeSpec::from_json(obj.get("arg")?)?;
                let result = TypeSpec::from_json(obj.get("result")?)?;
                Some(TypeSpec::func(arg, result))
            }
            "list" => Some(TypeSpec::list(TypeSpec::from_json(obj.get("element")?)?)),
            _ => None,
        }
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Atom(atom) => write!(f, "{}", atom),
            TypeSpec::Func { arg, result } => write!(f, "({} -> {})", arg, result),
            TypeSpec::List { element } => write!(f, "[{}]", element),
        }
    }
}

// ──────────────────────────────────────────────
// Runtime values
// ──────────────────────────────────────────────

/// A reconstructed runtime value.
///
/// Functions compare unequal to everything, including themselves;
/// equality is only meaningful for data.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Text(String),
    List(Vec<Value>),
    Func(FuncValue),
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Returns a human-readable type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Bool(_) => "bool",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Func(_) => "func",
        }
    }

    /// Extracts an integer or returns a type mismatch.
    pub fn into_int(self) -> Result<i64, ReconstructError> {
        match self {
            Value::Int(v) => Ok(v),
            other => Err(other.mismatch("int")),
        }
    }

    /// Extracts a boolean or returns a type mismatch.
    pub fn into_bool(self) -> Result<bool, ReconstructError> {
        match self {
            Value::Bool(b) => Ok(b),
            other => Err(other.mismatch("bool")),
        }
    }

    /// Extracts a callable function or returns a type mismatch.
    pub fn into_func(self) -> Result<FuncValue, ReconstructError> {
        match self {
            Value::Func(f) => Ok(f),
            other => Err(other.mismatch("func")),
        }
    }

    /// Extracts list elements or returns a type mismatch.
    pub fn into_list(self) -> Result<Vec<Value>, ReconstructError> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(other.mismatch("list")),
        }
    }

    fn mismatch(&self, expected: &str) -> ReconstructError {
        ReconstructError::TypeMismatch {
            expected: expected.to_string(),
            found: self.type_name().to_string(),
        }
    }

    /// Parse a plain (untagged) JSON value as a runtime value. Numbers
    /// must be integers; objects and functions have no JSON form.
    pub fn from_json(value: &serde_json::Value) -> Option<Value> {
        match value {
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::Number(n) => n.as_i64().map(Value::Int),
            serde_json::Value::String(s) => Some(Value::Text(s.clone())),
            serde_json::Value::Array(items) => items
                .iter()
                .map(Value::from_json)
                .collect::<Option<Vec<Value>>>()
                .map(Value::List),
            _ => None,
        }
    }

    /// Render as plain JSON. Functions render as a tagged placeholder
    /// object, since they have no data form.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Int(v) => serde_json::Value::from(*v),
            Value::Bool(b) => serde_json::Value::from(*b),
            Value::Text(s) => serde_json::Value::from(s.as_str()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(|v| v.to_json()).collect())
            }
            Value::Func(_) => {
                let mut obj = serde_json::Map::new();
                obj.insert("kind".to_string(), serde_json::Value::from("function"));
                serde_json::Value::Object(obj)
            }
        }
    }
}

/// A callable reconstructed function.
///
/// The body is only rebuilt against an argument when called, so a call
/// can fail even though reconstructing the function itself succeeded.
/// Cloning shares the underlying closure.
#[derive(Clone)]
pub struct FuncValue(Rc<dyn Fn(Value) -> Result<Value, ReconstructError>>);

impl FuncValue {
    pub fn new(f: impl Fn(Value) -> Result<Value, ReconstructError> + 'static) -> Self {
        FuncValue(Rc::new(f))
    }

    pub fn call(&self, arg: Value) -> Result<Value, ReconstructError> {
        (self.0)(arg)
    }
}

impl fmt::Debug for FuncValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FuncValue(..)")
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
