//! JSON codec for expression trees and literal payloads.
//!
//! Whole trees go through serde (`to_value` / `from_value`); literal
//! payloads additionally get a standalone kind-checked decoder so a
//! consumer holding an expected atomic type can accept or reject a
//! payload without deserializing anything around it.

use thiserror::Error;

use crate::expr::{Atom, Expr, Lit};

/// Failure to move an expression tree across the JSON boundary.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed expression tree: {0}")]
    Malformed(String),
    #[error("unserializable expression tree: {0}")]
    Unserializable(String),
}

/// Serialize a tree to its interchange JSON form.
pub fn to_value(expr: &Expr) -> Result<serde_json::Value, CodecError> {
    serde_json::to_value(expr).map_err(|e| CodecError::Unserializable(e.to_string()))
}

/// Parse a tree from its interchange JSON form.
pub fn from_value(value: &serde_json::Value) -> Result<Expr, CodecError> {
    serde_json::from_value(value.clone()).map_err(|e| CodecError::Malformed(e.to_string()))
}

/// Encode one literal payload as its tagged wire object.
pub fn encode_literal(lit: &Lit) -> serde_json::Value {
    let (kind, value) = match lit {
        Lit::Int(v) => ("int", serde_json::Value::from(*v)),
        Lit::Bool(b) => ("bool", serde_json::Value::from(*b)),
        Lit::Text(s) => ("text", serde_json::Value::from(s.as_str())),
    };
    let mut obj = serde_json::Map::new();
    obj.insert("kind".to_string(), serde_json::Value::from(kind));
    obj.insert("value".to_string(), value);
    serde_json::Value::Object(obj)
}

/// Decode a tagged wire object as a literal of the expected atomic kind.
/// Returns `None` when the object is not a literal or its kind tag (or
/// payload shape) does not match `expected`.
pub fn decode_literal(value: &serde_json::Value, expected: Atom) -> Option<Lit> {
    let obj = value.as_object()?;
    let kind = obj.get("kind")?.as_str()?;
    let payload = obj.get("value")?;
    match (kind, expected) {
        ("int", Atom::Int) => payload.as_i64().map(Lit::Int),
        ("bool", Atom::Bool) => payload.as_bool().map(Lit::Bool),
        ("text", Atom::Text) => payload.as_str().map(|s| Lit::Text(s.to_string())),
        _ => None,
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
