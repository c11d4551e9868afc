//! Property-based tests for the simplifier.
//!
//! These tests generate random expression trees and verify:
//! 1. Preservation: a tree that evaluates without overflow simplifies to a
//!    tree that evaluates to the same integer
//! 2. Idempotence: simplify(simplify(e)) == simplify(e), structurally
//! 3. The tree reachable from the simplified root never grows
//!
//! This complements the unit tests in `src/simplify/tests.rs`, which pin the
//! individual rewrite rules, by exercising rule interaction on shapes not
//! present in the hand-written corpus.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use mica_canon::simplify;
use mica_eval::{eval, Environment};
use mica_ir::{BinaryOp, ExprArena, ExprId, ExprKind, Name, StringInterner};
use proptest::prelude::*;

// -- Tree Generation Strategies --

/// Candidate variable names. Every generated tree draws from this pool, and
/// every generated environment binds all of them, so each tree's free
/// variables are always covered.
const VAR_NAMES: [&str; 4] = ["w", "x", "y", "z"];

/// Helper tree built by the strategies, lowered into an arena afterwards.
/// Strategies recurse naturally over boxes; the IR stays flat.
#[derive(Clone, Debug)]
enum Node {
    Int(i64),
    Var(usize),
    Binary(BinaryOp, Box<Node>, Box<Node>),
}

/// Generate a random expression tree, at most 6 levels deep.
fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        (-100i64..=100).prop_map(Node::Int),
        (0usize..VAR_NAMES.len()).prop_map(Node::Var),
    ];
    leaf.prop_recursive(6, 64, 2, |inner| {
        (
            prop_oneof![Just(BinaryOp::Add), Just(BinaryOp::Mul)],
            inner.clone(),
            inner,
        )
            .prop_map(|(op, left, right)| Node::Binary(op, Box::new(left), Box::new(right)))
    })
}

fn intern_names(interner: &StringInterner) -> Vec<Name> {
    VAR_NAMES.iter().map(|s| interner.intern(s)).collect()
}

fn build(node: &Node, arena: &mut ExprArena, names: &[Name]) -> ExprId {
    match node {
        Node::Int(value) => arena.int(*value),
        Node::Var(idx) => arena.var(names[*idx]),
        Node::Binary(op, left, right) => {
            let lhs = build(left, arena, names);
            let rhs = build(right, arena, names);
            arena.binary(*op, lhs, rhs)
        }
    }
}

/// Count the nodes reachable from `id` (the output arena may also hold
/// unreachable fold leftovers, which don't count).
fn reachable_size(arena: &ExprArena, id: ExprId) -> usize {
    match arena.kind(id) {
        ExprKind::Int(_) | ExprKind::Var(_) => 1,
        ExprKind::Binary { left, right, .. } => {
            1 + reachable_size(arena, left) + reachable_size(arena, right)
        }
    }
}

// -- Properties --

proptest! {
    #[test]
    fn prop_simplify_preserves_successful_evaluation(
        node in node_strategy(),
        values in proptest::array::uniform4(-100i64..=100),
    ) {
        let interner = StringInterner::new();
        let names = intern_names(&interner);
        let mut arena = ExprArena::new();
        let root = build(&node, &mut arena, &names);

        let mut env = Environment::new();
        for (&name, value) in names.iter().zip(values) {
            env.define(name, value);
        }

        let (out, new_root) = simplify(&arena, root);
        // Deep products can overflow; when direct evaluation fails there is
        // nothing to preserve (the simplified tree may legitimately succeed,
        // e.g. after `0 * overflowing → 0`).
        if let Ok(value) = eval(&arena, root, &env, &interner) {
            prop_assert_eq!(eval(&out, new_root, &env, &interner), Ok(value));
        }
    }

    #[test]
    fn prop_simplify_idempotent(node in node_strategy()) {
        let interner = StringInterner::new();
        let names = intern_names(&interner);
        let mut arena = ExprArena::new();
        let root = build(&node, &mut arena, &names);

        let (once, once_root) = simplify(&arena, root);
        let (twice, twice_root) = simplify(&once, once_root);
        prop_assert!(once.structurally_eq(once_root, &twice, twice_root));
    }

    #[test]
    fn prop_simplify_never_grows(node in node_strategy()) {
        let interner = StringInterner::new();
        let names = intern_names(&interner);
        let mut arena = ExprArena::new();
        let root = build(&node, &mut arena, &names);

        let (out, new_root) = simplify(&arena, root);
        prop_assert!(reachable_size(&out, new_root) <= reachable_size(&arena, root));
    }
}
