//! Meaning-preserving simplification for the Mica compiler.
//!
//! This crate rewrites an expression tree into a semantically-equal tree
//! whose reachable form is never larger: algebraic identity and annihilator
//! rules plus checked constant folding.
//!
//! # Pipeline Position
//!
//! ```text
//! Expr → **simplify** → eval                  (direct branch)
//!                     → locate → stage → run  (staged branch)
//! ```
//!
//! The pass is optional — both branches accept unsimplified trees — and
//! idempotent: running it twice produces a structurally identical result.
//!
//! # Soundness
//!
//! Every rule preserves `eval`'s checked semantics: an expression that
//! evaluates without overflow simplifies to one that evaluates to the same
//! integer. Constant folds that would overflow `i64` are left in the tree
//! and deferred to runtime. Rules that are only valid over unbounded
//! integers (for example `(a+b)-b → a` once subtraction exists) are not
//! adopted.

mod simplify;

pub use simplify::simplify;
