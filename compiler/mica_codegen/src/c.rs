//! C expression and translation-unit emission.

use std::fmt::Write;

use mica_ir::{ExprArena, ExprId, ExprKind, StringInterner};
use mica_stage::SlotTable;

use crate::{CodegenError, CodegenResult};

/// C code generator over a slot-resolved expression.
///
/// Borrows the phase outputs it renders from: the arena, the slot table
/// built by `mica_stage::locate`, and the interner (names appear only in
/// error messages — the emitted code reads `slots[i]`, never a name).
pub struct CCodegen<'a> {
    arena: &'a ExprArena,
    table: &'a SlotTable,
    interner: &'a StringInterner,
}

impl<'a> CCodegen<'a> {
    /// Create a new code generator.
    pub fn new(arena: &'a ExprArena, table: &'a SlotTable, interner: &'a StringInterner) -> Self {
        Self {
            arena,
            table,
            interner,
        }
    }

    /// Emit the C expression text for a node.
    ///
    /// Dispatch mirrors the printer, emitting operational syntax instead of
    /// decorative text:
    /// - `Int(v)` → `INT64_C(v)`
    /// - `Var(name)` → `slots[i]` with `i` the name's slot
    /// - `Binary` → `(left op right)`, always parenthesized
    pub fn expr_text(&self, id: ExprId) -> Result<String, CodegenError> {
        match self.arena.kind(id) {
            ExprKind::Int(value) => Ok(format!("INT64_C({value})")),
            ExprKind::Var(name) => {
                let slot = self.table.slot_of(name).ok_or_else(|| CodegenError {
                    message: format!(
                        "variable `{}` has no slot in the resolution table",
                        self.interner.lookup(name)
                    ),
                })?;
                Ok(format!("slots[{slot}]"))
            }
            ExprKind::Binary { op, left, right } => {
                let lhs = self.expr_text(left)?;
                let rhs = self.expr_text(right)?;
                Ok(format!("({lhs} {} {rhs})", op.as_symbol()))
            }
        }
    }

    /// Emit a complete translation unit around the expression.
    ///
    /// The function takes the positional environment as a `const int64_t *`
    /// and returns the expression's value:
    ///
    /// ```c
    /// #include <stdint.h>
    ///
    /// int64_t NAME(const int64_t *slots) {
    ///     return EXPR;
    /// }
    /// ```
    pub fn generate(&self, root: ExprId, fn_name: &str) -> CodegenResult {
        let expr = match self.expr_text(root) {
            Ok(expr) => expr,
            Err(err) => return CodegenResult::error(err.message),
        };

        let mut code = String::with_capacity(expr.len().saturating_add(96));
        code.push_str("#include <stdint.h>\n\n");
        // Writing into a String cannot fail.
        let _ = write!(
            code,
            "int64_t {fn_name}(const int64_t *slots) {{\n    return {expr};\n}}\n"
        );
        CodegenResult::success(code)
    }
}
