//! Error types for evaluation.
//!
//! `EvalErrorKind` provides typed error categories for programmatic
//! matching. Factory functions (e.g. `undefined_variable()`) are the public
//! constructors — they populate both `kind` and `message`.

use mica_ir::BinaryOp;
use std::fmt;

/// Result of evaluation.
pub type EvalResult = Result<i64, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Arithmetic left the `i64` range.
    IntegerOverflow { operation: String },
    /// A variable had no binding in the supplied environment.
    UndefinedVariable { name: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
        }
    }
}

/// Evaluation error.
///
/// Always fatal to the single failing call: evaluation is deterministic, so
/// a retry cannot change the outcome, and no partial result is produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message.
    ///
    /// For factory-created errors, this equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Create an error from a structured kind.
    ///
    /// The message is computed from the kind's `Display` impl. Used
    /// internally by the factory functions.
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

/// Undefined variable.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// Integer overflow in a binary operation.
#[cold]
pub fn integer_overflow(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: format!("binary `{}`", op.as_symbol()),
    })
}
