//! Struct descriptors.
//!
//! One spec per analyzed struct declaration, holding its field specs in
//! declaration order for the template stage.

use crate::fields::FieldSpec;

/// Ordered field specs for one struct declaration.
#[derive(Debug, Clone)]
pub struct StructSpec {
    /// Struct name as declared.
    pub name: String,
    /// Field specs in declaration order.
    pub fields: Vec<FieldSpec>,
}

impl StructSpec {
    /// Creates an empty struct spec.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field spec, keeping declaration order.
    pub fn add_field(&mut self, field: FieldSpec) {
        self.fields.push(field);
    }

    /// Looks up a field spec by declared name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if the struct has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
