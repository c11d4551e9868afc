//! Environment binding variable names to integer values.

use mica_ir::Name;
use rustc_hash::FxHashMap;

/// Name-keyed environment supplied by the caller of [`eval`](crate::eval).
///
/// The object language has no binding forms, so there is no scope chain: one
/// flat map (`FxHashMap` for fast hashing with `Name` keys) covers every free
/// variable of the expression under evaluation. The caller must bind every
/// free variable; unbound lookups surface as `UndefinedVariable` at the point
/// of use.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<Name, i64>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment {
            bindings: FxHashMap::default(),
        }
    }

    /// Bind a variable. Re-defining a name replaces the previous binding.
    #[inline]
    pub fn define(&mut self, name: Name, value: i64) {
        self.bindings.insert(name, value);
    }

    /// Look up a variable by name.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<i64> {
        self.bindings.get(&name).copied()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the environment has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
