//! Positional (slot-indexed) environments.

use mica_eval::{undefined_variable, Environment, EvalError};
use mica_ir::StringLookup;

use crate::locate::SlotTable;

/// Ordered integer environment, index-aligned with a [`SlotTable`]:
/// `positional.get(table.slot_of(name)) == environment.lookup(name)`.
///
/// Built once per (expression, environment) pair and consumed repeatedly by
/// a staged program; each invocation borrows it read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionalEnv {
    values: Vec<i64>,
}

impl PositionalEnv {
    /// Value in `slot`.
    ///
    /// # Panics
    /// Panics if `slot` is out of range — unreachable for environments
    /// built by [`to_positional`] against the same table the program was
    /// staged with.
    #[inline]
    pub fn get(&self, slot: u32) -> i64 {
        self.values[slot as usize]
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Convert a name-keyed environment into slot order.
///
/// Fails with `UndefinedVariable` if any resolved name has no binding —
/// fatal to this single call, exactly as an unbound lookup is at `eval`
/// time. Bindings for names the table does not mention are ignored.
pub fn to_positional(
    env: &Environment,
    table: &SlotTable,
    interner: &impl StringLookup,
) -> Result<PositionalEnv, EvalError> {
    let mut values = Vec::with_capacity(table.len());
    for &name in table.names() {
        let value = env
            .lookup(name)
            .ok_or_else(|| undefined_variable(interner.lookup(name)))?;
        values.push(value);
    }
    Ok(PositionalEnv { values })
}
