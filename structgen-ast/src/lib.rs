//! # structgen-ast
//!
//! Type-expression model and resolution for Go struct fields.
//!
//! This crate provides:
//! - A closed type-expression tree built by a parsing harness
//! - Resolution to a flat name + pointer descriptor
//! - Injectable resolution diagnostics
//! - Identifier casing for query-parameter keys

pub mod diag;
pub mod expr;
pub mod naming;
pub mod resolve;

pub use diag::{Discard, Observer, Recording, Trace};
pub use expr::TypeExpr;
pub use naming::to_snake_case;
pub use resolve::{ResolvedType, resolve, resolve_with};
