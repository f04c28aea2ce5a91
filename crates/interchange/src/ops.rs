//! Operator identifiers shared by the builder and the reconstructors.
//!
//! These strings are part of the wire format: a tree built today must
//! reconstruct tomorrow, so the identifiers never change casing or
//! spelling. `printLn` keeps its historical camel case for that reason.

/// Integer addition, arity 2.
pub const PLUS: &str = "plus";
/// Integer subtraction, arity 2.
pub const MINUS: &str = "minus";
/// Integer multiplication, arity 2.
pub const TIMES: &str = "times";
/// Boolean conjunction, arity 2.
pub const AND: &str = "and";
/// Boolean disjunction, arity 2.
pub const OR: &str = "or";
/// Boolean negation, arity 1.
pub const NOT: &str = "not";
/// Conditional selection, arity 3: guard, then-branch, else-branch.
pub const COND: &str = "cond";
/// List map, arity 2: list, unary function.
pub const MAP: &str = "map";
/// List fold, arity 3: list, initial accumulator, curried two-argument
/// function taking the accumulator first.
pub const FOLD: &str = "fold";
/// Console output, arity 1.
pub const PRINT_LINE: &str = "printLn";

/// Prefix for the synthetic variables a builder emits in place of
/// console reads. The numeric suffix is the read's invocation index.
pub const READ_LINE_PREFIX: &str = "_result_readLn_";
