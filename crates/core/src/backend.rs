//! The representation abstraction every vocabulary is written against.

use std::fmt;
use std::rc::Rc;

/// A backend picks one concrete representation for each expression type.
/// The evaluator picks the host type itself; the builder picks a
/// phantom-typed expression tree.
///
/// Backends are `Copy + 'static` so that an expression generic over one
/// can move it into the closures `lam`, `map` and `fold` take. Both
/// shipped backends are zero-sized; a backend that needs state keeps it
/// behind a shared handle, the way the builder's name supply does.
pub trait Backend: Copy + 'static {
    /// The representation of an expression of type `A`. The `'static`
    /// bound lets representations move into the boxed closures that
    /// function-typed expressions become.
    type Repr<A: Clone + 'static>: Clone + 'static;
}

/// A callable host function value, the evaluator's representation of a
/// function type. Cloning shares the underlying closure.
pub struct HostFn<A, B>(Rc<dyn Fn(A) -> B>);

impl<A, B> HostFn<A, B> {
    pub fn new(f: impl Fn(A) -> B + 'static) -> Self {
        HostFn(Rc::new(f))
    }

    pub fn call(&self, arg: A) -> B {
        (self.0)(arg)
    }
}

impl<A, B> Clone for HostFn<A, B> {
    fn clone(&self) -> Self {
        HostFn(Rc::clone(&self.0))
    }
}

impl<A, B> fmt::Debug for HostFn<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HostFn(..)")
    }
}
