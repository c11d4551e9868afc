//! Binary operator evaluation.

use crate::errors::{integer_overflow, EvalResult};
use mica_ir::BinaryOp;

/// Evaluate a binary operation on two integers.
///
/// Arithmetic is checked: overflow is an `IntegerOverflow` error, never a
/// silent wraparound. Shared by the direct interpreter and the staged runner
/// so the two agree bit-for-bit.
#[inline]
pub fn evaluate_binary(op: BinaryOp, lhs: i64, rhs: i64) -> EvalResult {
    let result = match op {
        BinaryOp::Add => lhs.checked_add(rhs),
        BinaryOp::Mul => lhs.checked_mul(rhs),
    };
    result.ok_or_else(|| integer_overflow(op))
}
