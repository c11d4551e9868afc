//! Mica Stage - name resolution and phase-split staged compilation.
//!
//! Staging splits evaluation into a one-time phase over the tree's
//! structure and a repeated phase over runtime values, so the repeated
//! phase carries none of the one-time cost:
//!
//! 1. [`locate`] assigns every distinct variable name a dense slot index
//!    (one pass over the tree, pre-order, left child before right).
//! 2. [`to_positional`] converts a name-keyed environment into slot order
//!    (once per environment).
//! 3. [`stage`] compiles the tree against the slot table, doing every
//!    name → slot lookup up front (once per tree).
//! 4. [`StagedProgram::run`] is the hot path: integer-indexed structural
//!    recursion, no name comparisons, no table lookups.
//!
//! # Pipeline Position
//!
//! ```text
//! Expr → [simplify]* → **locate → stage** → run → i64
//! ```
//!
//! # Sharing
//!
//! `SlotTable` and `StagedProgram` are immutable once constructed and may
//! be shared read-only across threads; each invocation supplies its own
//! `PositionalEnv`.
//!
//! Arithmetic and error types come from `mica_eval`, so staged and direct
//! evaluation agree bit-for-bit, overflow errors included:
//! `stage(e, locate(e)).run(to_positional(env)) == eval(e, env)`.

mod locate;
mod positional;
mod stage;

pub use locate::{locate, SlotTable};
pub use positional::{to_positional, PositionalEnv};
pub use stage::{stage, StagedExpr, StagedId, StagedProgram};
