//! # structgen-codegen
//!
//! Field and struct descriptors for Go accessor generation.
//!
//! This crate provides:
//! - Per-field descriptors wrapping type resolution
//! - Struct-level aggregation in declaration order
//! - Go snippet rendering for accessors and zero values

pub mod fields;
pub mod structs;

pub use fields::FieldSpec;
pub use structs::StructSpec;
