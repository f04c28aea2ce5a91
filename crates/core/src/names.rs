//! Fresh-name generation for reified binders.
//!
//! The builder names every binder it records, so two different `lam`s in
//! one process must never draw the same name. Counters are per prefix
//! and live for the whole process; they are never reset implicitly,
//! which keeps names unique across any number of builder runs.

use std::collections::BTreeMap;
use std::sync::Mutex;

/// Per-prefix counters behind one lock. `fresh("x")` yields `x0`, `x1`,
/// and so on; each prefix counts independently.
#[derive(Debug)]
pub struct GenSym {
    counters: Mutex<BTreeMap<String, u64>>,
}

impl GenSym {
    pub const fn new() -> Self {
        GenSym {
            counters: Mutex::new(BTreeMap::new()),
        }
    }

    /// Next unseen name for `prefix`.
    pub fn fresh(&self, prefix: &str) -> String {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        let n = counters.entry(prefix.to_string()).or_insert(0);
        let name = format!("{prefix}{n}");
        *n += 1;
        name
    }

    /// Forget every counter, so the next draws start at 0 again. Meant
    /// for tests and tools that want reproducible names; the library
    /// never calls this on the shared instance.
    pub fn reset(&self) {
        self.counters
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl Default for GenSym {
    fn default() -> Self {
        GenSym::new()
    }
}

static GLOBAL: GenSym = GenSym::new();

/// Draw from the process-wide generator backing [`crate::Builder`].
pub fn fresh(prefix: &str) -> String {
    GLOBAL.fresh(prefix)
}

/// Reset the process-wide generator. See [`GenSym::reset`].
pub fn reset() {
    GLOBAL.reset()
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_count_up_per_prefix() {
        let gen = GenSym::new();
        assert_eq!(gen.fresh("x"), "x0");
        assert_eq!(gen.fresh("x"), "x1");
        assert_eq!(gen.fresh("x"), "x2");
    }

    #[test]
    fn prefixes_are_independent() {
        let gen = GenSym::new();
        assert_eq!(gen.fresh("x"), "x0");
        assert_eq!(gen.fresh("acc"), "acc0");
        assert_eq!(gen.fresh("x"), "x1");
        assert_eq!(gen.fresh("acc"), "acc1");
    }

    #[test]
    fn reset_starts_over() {
        let gen = GenSym::new();
        gen.fresh("x");
        gen.fresh("x");
        gen.reset();
        assert_eq!(gen.fresh("x"), "x0");
    }

    #[test]
    fn global_generator_never_repeats() {
        // Other tests share the global instance, so only relative
        // behavior is observable here: draws must be distinct.
        let a = fresh("t");
        let b = fresh("t");
        let c = fresh("u");
        assert_ne!(a, b);
        assert!(a.starts_with('t'));
        assert!(b.starts_with('t'));
        assert!(c.starts_with('u'));
    }
}
