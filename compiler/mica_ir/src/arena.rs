//! Expression arena.
//!
//! [`ExprArena`] is a flat vector of [`ExprKind`] addressed by [`ExprId`].
//! Nodes are immutable once pushed; transformation passes allocate new nodes
//! rather than editing in place. A node's children are always pushed before
//! the node itself, so trees are acyclic by construction.

use crate::{BinaryOp, ExprId, ExprKind, Name};

/// Arena for expressions.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    kinds: Vec<ExprKind>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Create an arena pre-allocated for roughly `nodes` expressions.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            kinds: Vec::with_capacity(nodes),
        }
    }

    /// Allocate a node, returning its ID.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32` capacity.
    pub fn push(&mut self, kind: ExprKind) -> ExprId {
        let raw = u32::try_from(self.kinds.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded u32 capacity"));
        self.kinds.push(kind);
        ExprId::new(raw)
    }

    /// Get the kind for a node.
    ///
    /// `ExprKind` is a 16-byte `Copy` enum, so this returns it by value.
    #[inline]
    pub fn kind(&self, id: ExprId) -> ExprKind {
        self.kinds[id.index()]
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if the arena has no nodes.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    // Smart constructors
    //
    // No validation beyond well-typed construction: an integer for `int`,
    // already-constructed children for `binary`, a non-empty name for `var`.

    /// Integer literal.
    #[inline]
    pub fn int(&mut self, value: i64) -> ExprId {
        self.push(ExprKind::Int(value))
    }

    /// Variable reference.
    #[inline]
    pub fn var(&mut self, name: Name) -> ExprId {
        debug_assert!(name != Name::EMPTY, "variable name must be non-empty");
        self.push(ExprKind::Var(name))
    }

    /// Binary operation over two already-constructed children.
    #[inline]
    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        debug_assert!(left.is_valid() && right.is_valid());
        self.push(ExprKind::Binary { op, left, right })
    }

    /// `left + right`.
    #[inline]
    pub fn add(&mut self, left: ExprId, right: ExprId) -> ExprId {
        self.binary(BinaryOp::Add, left, right)
    }

    /// `left * right`.
    #[inline]
    pub fn mul(&mut self, left: ExprId, right: ExprId) -> ExprId {
        self.binary(BinaryOp::Mul, left, right)
    }

    /// Structural equality, possibly across arenas.
    ///
    /// Two trees are structurally equal iff the variant tags and all fields
    /// are equal, recursively. This is a conservative, decidable subset of
    /// semantic equality (equal under every environment); the simplifier and
    /// the tests rely only on the structural form.
    pub fn structurally_eq(&self, id: ExprId, other: &ExprArena, other_id: ExprId) -> bool {
        match (self.kind(id), other.kind(other_id)) {
            (ExprKind::Int(a), ExprKind::Int(b)) => a == b,
            (ExprKind::Var(a), ExprKind::Var(b)) => a == b,
            (
                ExprKind::Binary {
                    op: op_a,
                    left: left_a,
                    right: right_a,
                },
                ExprKind::Binary {
                    op: op_b,
                    left: left_b,
                    right: right_b,
                },
            ) => {
                op_a == op_b
                    && self.structurally_eq(left_a, other, left_b)
                    && self.structurally_eq(right_a, other, right_b)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringInterner;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_push_and_kind() {
        let mut arena = ExprArena::new();
        let two = arena.int(2);
        assert_eq!(arena.kind(two), ExprKind::Int(2));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_smart_constructors() {
        let interner = StringInterner::new();
        let x = interner.intern("x");

        let mut arena = ExprArena::new();
        let lit = arena.int(1);
        let var = arena.var(x);
        let sum = arena.add(lit, var);

        match arena.kind(sum) {
            ExprKind::Binary { op, left, right } => {
                assert_eq!(op, BinaryOp::Add);
                assert_eq!(arena.kind(left), ExprKind::Int(1));
                assert_eq!(arena.kind(right), ExprKind::Var(x));
            }
            other => panic!("expected Binary, got {other:?}"),
        }
    }

    #[test]
    fn test_structural_equality_same_arena() {
        let mut arena = ExprArena::new();
        let a1 = arena.int(1);
        let b1 = arena.int(2);
        let sum1 = arena.add(a1, b1);

        let a2 = arena.int(1);
        let b2 = arena.int(2);
        let sum2 = arena.add(a2, b2);

        assert!(arena.structurally_eq(sum1, &arena, sum2));
    }

    #[test]
    fn test_structural_equality_across_arenas() {
        let interner = StringInterner::new();
        let x = interner.intern("x");

        let mut lhs = ExprArena::new();
        let l1 = lhs.int(3);
        let l2 = lhs.var(x);
        let l_root = lhs.mul(l1, l2);

        let mut rhs = ExprArena::new();
        let r1 = rhs.int(3);
        let r2 = rhs.var(x);
        let r_root = rhs.mul(r1, r2);

        assert!(lhs.structurally_eq(l_root, &rhs, r_root));
    }

    #[test]
    fn test_structural_inequality() {
        let interner = StringInterner::new();
        let x = interner.intern("x");
        let y = interner.intern("y");

        let mut arena = ExprArena::new();
        let var_x = arena.var(x);
        let var_y = arena.var(y);
        let one = arena.int(1);
        let add_x = arena.add(one, var_x);
        let mul_x = arena.mul(one, var_x);

        // Different variable.
        assert!(!arena.structurally_eq(var_x, &arena, var_y));
        // Different operator, same children.
        assert!(!arena.structurally_eq(add_x, &arena, mul_x));
        // Different variant.
        assert!(!arena.structurally_eq(one, &arena, var_x));
    }
}
