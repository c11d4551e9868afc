//! Phase-split staged compilation.
//!
//! [`stage`] performs every name → slot lookup once, up front, producing a
//! [`StagedProgram`] whose invocation consumes only a positional
//! environment. The staged computation is a tagged variant tree flattened
//! into an id-indexed vector — not a host closure — so the two-phase
//! contract (no table lookups on the hot path) is enforced by the shape of
//! the data rather than by discipline.

use mica_eval::{evaluate_binary, undefined_variable, EvalError, EvalResult};
use mica_ir::{BinaryOp, ExprArena, ExprId, ExprKind, StringLookup};

use crate::locate::SlotTable;
use crate::positional::PositionalEnv;

/// Index into a staged program's node vector.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct StagedId(u32);

impl StagedId {
    #[inline]
    const fn new(index: u32) -> Self {
        StagedId(index)
    }

    /// Get the index into the program.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One staged operation.
///
/// Everything name-dependent was resolved at staging time: a variable
/// carries its slot index, never its name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StagedExpr {
    /// Constant — ignores the positional environment.
    Const(i64),
    /// Positional environment read at a fixed slot.
    Slot(u32),
    /// Combine two already-staged children.
    Binary {
        op: BinaryOp,
        left: StagedId,
        right: StagedId,
    },
}

/// A staged computation: flat nodes plus the root id.
///
/// Immutable once built; safe to share read-only across threads, with each
/// invocation supplying its own [`PositionalEnv`].
#[derive(Clone, Debug)]
pub struct StagedProgram {
    nodes: Vec<StagedExpr>,
    root: StagedId,
    slot_count: usize,
}

impl StagedProgram {
    /// Run the staged computation over a positional environment.
    ///
    /// This is the repeated phase: O(program size) structural recursion
    /// with no name comparisons and no table lookups. Arithmetic is the
    /// same checked dispatch the direct interpreter uses, so for a
    /// positional environment built against the staging table,
    /// `run(to_positional(env, table))` agrees with `eval(e, env)` as a
    /// full `Result`, overflow errors included.
    pub fn run(&self, pe: &PositionalEnv) -> EvalResult {
        debug_assert_eq!(pe.len(), self.slot_count);
        self.run_node(self.root, pe)
    }

    fn run_node(&self, id: StagedId, pe: &PositionalEnv) -> EvalResult {
        match self.nodes[id.index()] {
            StagedExpr::Const(value) => Ok(value),
            StagedExpr::Slot(slot) => Ok(pe.get(slot)),
            StagedExpr::Binary { op, left, right } => {
                let lhs = self.run_node(left, pe)?;
                let rhs = self.run_node(right, pe)?;
                evaluate_binary(op, lhs, rhs)
            }
        }
    }

    /// Number of staged nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A staged program always holds at least its root node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of slots the positional environment must provide.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Allocate a staged node, returning its id.
    fn push(&mut self, node: StagedExpr) -> StagedId {
        let raw = u32::try_from(self.nodes.len())
            .unwrap_or_else(|_| panic!("staged program exceeded u32 capacity"));
        self.nodes.push(node);
        StagedId::new(raw)
    }
}

/// Stage an expression against a slot table (phase 1).
///
/// All table lookups happen here, once per `Var` node; the returned program
/// re-derives nothing at run time. Each child is staged exactly once — the
/// `Binary` case builds both sub-programs before emitting the combining
/// node, never inside it.
///
/// Fails with `UndefinedVariable` only when `table` does not cover a name
/// in the tree, which cannot happen for [`locate`](crate::locate)'s own
/// output over the same tree.
#[tracing::instrument(level = "trace", skip(arena, table, interner))]
pub fn stage(
    arena: &ExprArena,
    expr: ExprId,
    table: &SlotTable,
    interner: &impl StringLookup,
) -> Result<StagedProgram, EvalError> {
    let mut program = StagedProgram {
        nodes: Vec::with_capacity(arena.len()),
        root: StagedId::new(0),
        slot_count: table.len(),
    };
    let root = stage_node(arena, expr, table, interner, &mut program)?;
    program.root = root;
    Ok(program)
}

fn stage_node(
    arena: &ExprArena,
    id: ExprId,
    table: &SlotTable,
    interner: &impl StringLookup,
    program: &mut StagedProgram,
) -> Result<StagedId, EvalError> {
    match arena.kind(id) {
        ExprKind::Int(value) => Ok(program.push(StagedExpr::Const(value))),
        ExprKind::Var(name) => {
            let slot = table
                .slot_of(name)
                .ok_or_else(|| undefined_variable(interner.lookup(name)))?;
            Ok(program.push(StagedExpr::Slot(slot)))
        }
        ExprKind::Binary { op, left, right } => {
            let left = stage_node(arena, left, table, interner, program)?;
            let right = stage_node(arena, right, table, interner, program)?;
            Ok(program.push(StagedExpr::Binary { op, left, right }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::locate;
    use crate::positional::to_positional;
    use mica_eval::{eval, Environment, EvalErrorKind};
    use mica_ir::StringInterner;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_staged_matches_eval() {
        let interner = StringInterner::new();
        let a = interner.intern("a");
        let b = interner.intern("b");

        let mut arena = ExprArena::new();
        let var_a = arena.var(a);
        let var_b = arena.var(b);
        let root = arena.add(var_a, var_b);

        let mut env = Environment::new();
        env.define(a, 5);
        env.define(b, 7);

        let table = locate(&arena, root);
        let program = match stage(&arena, root, &table, &interner) {
            Ok(program) => program,
            Err(err) => panic!("unexpected error: {err}"),
        };
        let pe = match to_positional(&env, &table, &interner) {
            Ok(pe) => pe,
            Err(err) => panic!("unexpected error: {err}"),
        };

        assert_eq!(program.run(&pe), Ok(12));
        assert_eq!(program.run(&pe), eval(&arena, root, &env, &interner));
    }

    #[test]
    fn test_constant_program_ignores_environment() {
        let interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let one = arena.int(1);
        let two = arena.int(2);
        let root = arena.mul(one, two);

        let table = locate(&arena, root);
        let program = match stage(&arena, root, &table, &interner) {
            Ok(program) => program,
            Err(err) => panic!("unexpected error: {err}"),
        };
        assert_eq!(program.slot_count(), 0);

        let env = Environment::new();
        let pe = match to_positional(&env, &table, &interner) {
            Ok(pe) => pe,
            Err(err) => panic!("unexpected error: {err}"),
        };
        assert_eq!(program.run(&pe), Ok(2));
    }

    #[test]
    fn test_reuse_program_across_environments() {
        let interner = StringInterner::new();
        let x = interner.intern("x");

        // x * (x + 1)
        let mut arena = ExprArena::new();
        let var1 = arena.var(x);
        let var2 = arena.var(x);
        let one = arena.int(1);
        let inner = arena.add(var2, one);
        let root = arena.mul(var1, inner);

        let table = locate(&arena, root);
        let program = match stage(&arena, root, &table, &interner) {
            Ok(program) => program,
            Err(err) => panic!("unexpected error: {err}"),
        };

        for value in [-3, 0, 9] {
            let mut env = Environment::new();
            env.define(x, value);
            let pe = match to_positional(&env, &table, &interner) {
                Ok(pe) => pe,
                Err(err) => panic!("unexpected error: {err}"),
            };
            assert_eq!(program.run(&pe), Ok(value * (value + 1)));
        }
    }

    #[test]
    fn test_staged_overflow_matches_eval() {
        let interner = StringInterner::new();
        let mut arena = ExprArena::new();
        let max = arena.int(i64::MAX);
        let one = arena.int(1);
        let root = arena.add(max, one);

        let env = Environment::new();
        let table = locate(&arena, root);
        let program = match stage(&arena, root, &table, &interner) {
            Ok(program) => program,
            Err(err) => panic!("unexpected error: {err}"),
        };
        let pe = match to_positional(&env, &table, &interner) {
            Ok(pe) => pe,
            Err(err) => panic!("unexpected error: {err}"),
        };

        let staged = program.run(&pe);
        assert!(staged.is_err());
        assert_eq!(staged, eval(&arena, root, &env, &interner));
    }

    #[test]
    fn test_mismatched_table_is_an_error() {
        let interner = StringInterner::new();
        let x = interner.intern("x");

        let mut arena = ExprArena::new();
        let lit = arena.int(1);
        let lit_table = locate(&arena, lit);

        let var = arena.var(x);
        let err = match stage(&arena, var, &lit_table, &interner) {
            Err(err) => err,
            Ok(program) => panic!("expected UndefinedVariable, got {program:?}"),
        };
        assert_eq!(
            err.kind,
            EvalErrorKind::UndefinedVariable {
                name: "x".to_string()
            }
        );
    }
}
