//! Expression types.
//!
//! The object language is deliberately small: integer literals, binary `+`
//! and `*`, and externally-bound named variables. The variant set is closed
//! and every traversal in the pipeline (interpreter, printer, simplifier,
//! resolver, stager, code generator) matches on it exhaustively — adding a
//! variant is a compile-time obligation across all of them, not a runtime
//! "unrecognized variant" error.

use crate::{ExprId, Name};

/// Binary operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    /// Addition: `+`
    Add,
    /// Multiplication: `*`
    Mul,
}

impl BinaryOp {
    /// The operator's surface symbol, shared by the printer and the code
    /// generator.
    #[inline]
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Mul => "*",
        }
    }
}

/// Expression variants.
///
/// Children are arena indices, not boxes, so nodes stay `Copy` and a whole
/// tree lives in one contiguous allocation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: `42`
    Int(i64),

    /// Externally-bound variable reference (interned)
    Var(Name),

    /// Binary operation: `left op right`
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
}

crate::static_assert_size!(ExprKind, 16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_symbols() {
        assert_eq!(BinaryOp::Add.as_symbol(), "+");
        assert_eq!(BinaryOp::Mul.as_symbol(), "*");
    }

    #[test]
    fn test_expr_kind_is_copy() {
        let kind = ExprKind::Int(42);
        let copy = kind;
        assert_eq!(kind, copy);
    }
}
