//! Mica IR - Intermediate Representation Types
//!
//! This crate contains the core data structures for the Mica compiler:
//! - Names for interned identifiers
//! - The closed `BinaryOp` / `ExprKind` variant sets of the object language
//! - Arena allocation for expressions
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: variable names are `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//!
//! Expression trees are constructed once (by an external decoder, or by test
//! code) and never mutated. Every downstream pass allocates new nodes;
//! nothing edits a tree in place, so a slot table or staged program derived
//! from a tree stays valid for as long as the tree does.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod expr;
mod expr_id;
mod interner;
mod name;

pub use arena::ExprArena;
pub use expr::{BinaryOp, ExprKind};
pub use expr_id::ExprId;
pub use interner::{SharedInterner, StringInterner, StringLookup};
pub use name::Name;
