//! Mica Fmt - expression printer for the Mica compiler.
//!
//! Renders an expression to fully parenthesized infix text: every binary
//! node is wrapped in parentheses, with no precedence-based elision. The
//! output is a pure function of the tree's structure, so equal trees always
//! render identically, and structurally distinct trees render to distinct
//! text.

use std::fmt::Write;

use mica_ir::{ExprArena, ExprId, ExprKind, StringLookup};

/// Render an expression as fully parenthesized infix text.
///
/// - `Int(v)` → decimal text of `v`
/// - `Var(name)` → the interned name
/// - `Binary { op, left, right }` → `"(" left op right ")"`
pub fn format_expr(arena: &ExprArena, root: ExprId, interner: &impl StringLookup) -> String {
    let mut out = String::with_capacity(arena.len().saturating_mul(4));
    write_expr(arena, root, interner, &mut out);
    out
}

fn write_expr(arena: &ExprArena, id: ExprId, interner: &impl StringLookup, out: &mut String) {
    match arena.kind(id) {
        ExprKind::Int(value) => {
            // Writing into a String cannot fail.
            let _ = write!(out, "{value}");
        }
        ExprKind::Var(name) => out.push_str(interner.lookup(name)),
        ExprKind::Binary { op, left, right } => {
            out.push('(');
            write_expr(arena, left, interner, out);
            out.push_str(op.as_symbol());
            write_expr(arena, right, interner, out);
            out.push(')');
        }
    }
}
