//! Bottom-up simplification rewrite.
//!
//! Children are rewritten first — always, even when no root-level rule
//! fires, because simplification is compositional — then root-level rules
//! apply in a fixed precedence order, first match wins:
//!
//! - `Add`: `0 + r` → `r`; `l + 0` → `l`; two literals → folded literal
//! - `Mul`: two literals → folded literal; a literal `0` → `0`;
//!   `1 * r` → `r`; `l * 1` → `l`
//! - `Int`, `Var`: already simplest form, copied through
//!
//! Folding uses checked arithmetic: a fold that would overflow `i64` is
//! left unfolded, so it surfaces at runtime as the interpreter's
//! `IntegerOverflow` error instead of silently wrapping at compile time.

use mica_ir::{BinaryOp, ExprArena, ExprId, ExprKind};

/// Simplify an expression into a fresh arena.
///
/// Returns the output arena and the id of the rewritten root. The input
/// arena is untouched. The result is semantically equal to the input under
/// every environment that binds all of the input's free variables, and the
/// tree reachable from the returned root never has more nodes than the
/// input tree. (The output arena itself may hold a few unreachable nodes —
/// literal children consumed by a fold.)
#[tracing::instrument(level = "trace", skip(arena))]
pub fn simplify(arena: &ExprArena, root: ExprId) -> (ExprArena, ExprId) {
    let mut simplifier = Simplifier {
        src: arena,
        out: ExprArena::with_capacity(arena.len()),
    };
    let new_root = simplifier.expr(root);
    (simplifier.out, new_root)
}

/// Rewrite pass state: the source arena and the output under construction.
struct Simplifier<'a> {
    src: &'a ExprArena,
    out: ExprArena,
}

impl Simplifier<'_> {
    /// Rewrite one node bottom-up.
    fn expr(&mut self, id: ExprId) -> ExprId {
        match self.src.kind(id) {
            ExprKind::Int(value) => self.out.int(value),
            ExprKind::Var(name) => self.out.var(name),
            ExprKind::Binary { op, left, right } => {
                let left = self.expr(left);
                let right = self.expr(right);
                self.binary(op, left, right)
            }
        }
    }

    /// Apply root-level rules to a binary node whose children are already
    /// simplified. First match wins.
    fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        match op {
            BinaryOp::Add => {
                if self.is_int(left, 0) {
                    return right;
                }
                if self.is_int(right, 0) {
                    return left;
                }
                if let Some(folded) = self.fold(op, left, right) {
                    return folded;
                }
            }
            BinaryOp::Mul => {
                if let Some(folded) = self.fold(op, left, right) {
                    return folded;
                }
                if self.is_int(left, 0) || self.is_int(right, 0) {
                    return self.out.int(0);
                }
                if self.is_int(left, 1) {
                    return right;
                }
                if self.is_int(right, 1) {
                    return left;
                }
            }
        }
        self.out.binary(op, left, right)
    }

    /// Fold two literal children with checked arithmetic.
    ///
    /// Returns `None` when either child is not a literal, or when the fold
    /// would overflow — overflow is deferred to runtime.
    fn fold(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> Option<ExprId> {
        let (ExprKind::Int(a), ExprKind::Int(b)) = (self.out.kind(left), self.out.kind(right))
        else {
            return None;
        };
        let folded = match op {
            BinaryOp::Add => a.checked_add(b)?,
            BinaryOp::Mul => a.checked_mul(b)?,
        };
        Some(self.out.int(folded))
    }

    /// Check whether a node in the output arena is the literal `value`.
    fn is_int(&self, id: ExprId, value: i64) -> bool {
        matches!(self.out.kind(id), ExprKind::Int(v) if v == value)
    }
}
