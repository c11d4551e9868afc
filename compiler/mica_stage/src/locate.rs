//! Name-to-slot resolution.

use mica_ir::{ExprArena, ExprId, ExprKind, Name};
use rustc_hash::FxHashMap;

/// Name → dense slot index table, built once per expression tree.
///
/// Slots are assigned in first-occurrence pre-order (left child before
/// right), so the layout is deterministic for a given tree: a table with
/// `k` distinct names uses exactly the indices `0..k`. The table keeps both
/// directions — the map for `slot_of`, and the dense name vector that
/// positional environments are index-aligned with.
#[derive(Clone, Debug, Default)]
pub struct SlotTable {
    slots: FxHashMap<Name, u32>,
    /// Slot → name view: `names[i]` owns slot `i`.
    names: Vec<Name>,
}

impl SlotTable {
    /// Slot index for a name, if the name occurs in the resolved tree.
    #[inline]
    pub fn slot_of(&self, name: Name) -> Option<u32> {
        self.slots.get(&name).copied()
    }

    /// Number of distinct variable names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the resolved tree had no variables.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in slot order.
    pub fn names(&self) -> &[Name] {
        &self.names
    }

    /// Assign the next dense slot to `name` unless it already has one.
    fn insert_first_occurrence(&mut self, name: Name) {
        if !self.slots.contains_key(&name) {
            let slot = u32::try_from(self.names.len())
                .unwrap_or_else(|_| panic!("slot table exceeded u32 capacity"));
            self.slots.insert(name, slot);
            self.names.push(name);
        }
    }
}

/// Resolve every distinct variable name in `expr` to a dense slot.
///
/// Pure function of the tree; never consults an environment. Literals and
/// the operator structure of binary nodes contribute no entries.
#[tracing::instrument(level = "trace", skip(arena))]
pub fn locate(arena: &ExprArena, expr: ExprId) -> SlotTable {
    let mut table = SlotTable::default();
    visit(arena, expr, &mut table);
    table
}

/// Pre-order walk, left child before right.
fn visit(arena: &ExprArena, id: ExprId, table: &mut SlotTable) {
    match arena.kind(id) {
        ExprKind::Int(_) => {}
        ExprKind::Var(name) => table.insert_first_occurrence(name),
        ExprKind::Binary { left, right, .. } => {
            visit(arena, left, table);
            visit(arena, right, table);
        }
    }
}
