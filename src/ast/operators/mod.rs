//! Operator node shapes. Split across files by operator family, mirroring
//! the teacher's `ast/*.rs` per-shape layout rather than one monolithic
//! `operators.rs`.
//!
//! Every postfix operator carries a `target: Expression` — the previously
//! accumulated expression in the postfix chain. These nodes are never built
//! directly off a single pest pair the way leaf literals are; construction
//! happens in `Expression::from_postfix_pair` (see `super::expression`),
//! which threads `target` through a left fold over `postfixOp*`.

mod binary;
mod conditional;
mod index;
mod splat;
mod unary;

pub use binary::*;
pub use conditional::*;
pub use index::*;
pub use splat::*;
pub use unary::*;
