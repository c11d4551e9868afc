//! Tree-walking interpreter.

use mica_ir::{ExprArena, ExprId, ExprKind, StringLookup};

use crate::environment::Environment;
use crate::errors::{undefined_variable, EvalResult};
use crate::operators::evaluate_binary;

/// Evaluate an expression under a name-keyed environment.
///
/// Structural recursion over the closed variant set:
/// - `Int(v)` → `v`
/// - `Binary { op, left, right }` → children evaluated left-to-right, then
///   combined with checked arithmetic
/// - `Var(name)` → the environment binding, or `UndefinedVariable`
///
/// Pure — no side effects — and total over any expression whose free
/// variables are all bound and whose arithmetic stays in `i64` range. The
/// interner only resolves names for error messages; the happy path never
/// touches string contents.
pub fn eval(
    arena: &ExprArena,
    expr: ExprId,
    env: &Environment,
    interner: &impl StringLookup,
) -> EvalResult {
    match arena.kind(expr) {
        ExprKind::Int(value) => Ok(value),
        ExprKind::Var(name) => env
            .lookup(name)
            .ok_or_else(|| undefined_variable(interner.lookup(name))),
        ExprKind::Binary { op, left, right } => {
            let lhs = eval(arena, left, env, interner)?;
            let rhs = eval(arena, right, env, interner)?;
            evaluate_binary(op, lhs, rhs)
        }
    }
}
