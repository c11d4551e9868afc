//! C Code Generation Backend for Mica
//!
//! Renders a slot-resolved expression as C source text. The emitted
//! expression is structurally isomorphic to the printer's output, but
//! operational: every variable becomes an indexed read of a `slots` array —
//! its slot taken from the same table the staged evaluator uses — never a
//! name lookup.
//!
//! # Architecture
//!
//! ```text
//! Expr + SlotTable
//!        ↓
//!     CCodegen         (emit expression text / translation unit)
//!        ↓
//!   CodegenResult      (C source + any errors)
//! ```
//!
//! # Runtime contract
//!
//! Compile the generated unit with a C compiler and call the function with
//! an `int64_t` array laid out by the same slot-table convention as
//! `mica_stage::to_positional`: it returns the same integer as direct
//! evaluation, within `i64` range. Host-side overflow behavior is the
//! host's; the external caller owns staying in range.

mod c;

pub use c::CCodegen;

/// Result of code generation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodegenResult {
    /// Generated C code (empty if errors occurred).
    pub code: String,
    /// Errors encountered during codegen.
    pub errors: Vec<CodegenError>,
    /// Whether codegen succeeded.
    pub success: bool,
}

impl CodegenResult {
    /// Create a successful result with generated code.
    pub fn success(code: String) -> Self {
        Self {
            code,
            errors: Vec::new(),
            success: true,
        }
    }

    /// Create an error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: String::new(),
            errors: vec![CodegenError {
                message: message.into(),
            }],
            success: false,
        }
    }

    /// Check if codegen failed.
    pub fn has_errors(&self) -> bool {
        !self.success || !self.errors.is_empty()
    }
}

/// A code generation error.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CodegenError {
    pub message: String,
}

impl std::fmt::Display for CodegenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CodegenError {}
