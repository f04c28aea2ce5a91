//! reprise-interchange: Untyped expression trees and their JSON codec.
//!
//! Provides the six-kind expression tree ([`Expr`]), its atomic literal
//! payloads ([`Lit`], [`Atom`]), the operator identifier table shared by
//! the builder and the reconstructors, and the codec functions that move
//! trees and literals across the JSON boundary.
//!
//! This crate is the contract between the two halves of the toolkit:
//! reprise-core lowers typed expressions into these trees, and
//! reprise-eval rebuilds typed callable values from them. Neither half
//! depends on the other, only on this one.

pub mod codec;
pub mod expr;
pub mod ops;

pub use codec::{decode_literal, encode_literal, from_value, to_value, CodecError};
pub use expr::{Atom, Expr, Lit};
