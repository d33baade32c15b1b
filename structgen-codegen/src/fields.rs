//! Field descriptors and snippet rendering.
//!
//! A field spec wraps exactly one resolution result per struct field
//! and renders the Go fragments the template stage splices into
//! generated accessors: member reads, dereferences, query-serialization
//! calls, and zero-value literals.

use structgen_ast::diag::Observer;
use structgen_ast::expr::TypeExpr;
use structgen_ast::naming::to_snake_case;
use structgen_ast::resolve::{ResolvedType, resolve, resolve_with};

/// Per-field metadata driving accessor and zero-value generation.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name as declared in the struct.
    pub name: String,
    /// snake_case spelling used as the query-parameter key.
    pub query_name: String,
    resolved: ResolvedType,
}

impl FieldSpec {
    /// Creates a field spec from a declared name, a precomputed
    /// snake_case key, and the field's type expression.
    #[must_use]
    pub fn new(name: impl Into<String>, query_name: impl Into<String>, ty: &TypeExpr) -> Self {
        Self {
            name: name.into(),
            query_name: query_name.into(),
            resolved: resolve(ty),
        }
    }

    /// Creates a field spec, deriving the query key from the field name.
    #[must_use]
    pub fn from_field(name: impl Into<String>, ty: &TypeExpr) -> Self {
        let name = name.into();
        let query_name = to_snake_case(&name);
        Self {
            name,
            query_name,
            resolved: resolve(ty),
        }
    }

    /// Creates a field spec, routing the wrapped resolution through
    /// `observer`.
    #[must_use]
    pub fn with_observer(
        name: impl Into<String>,
        query_name: impl Into<String>,
        ty: &TypeExpr,
        observer: &dyn Observer,
    ) -> Self {
        Self {
            name: name.into(),
            query_name: query_name.into(),
            resolved: resolve_with(ty, observer),
        }
    }

    /// Returns the resolved type descriptor.
    #[must_use]
    pub fn resolved(&self) -> &ResolvedType {
        &self.resolved
    }

    /// Returns true if the field's declared type was a pointer.
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        self.resolved.is_pointer
    }

    /// Returns true if the resolved name looks like an exported struct
    /// type (first character uppercase by Unicode case rules).
    #[must_use]
    pub fn is_struct(&self) -> bool {
        self.resolved
            .name
            .chars()
            .next()
            .is_some_and(char::is_uppercase)
    }

    /// Returns true if the field resolves to an array.
    #[must_use]
    pub fn has_len(&self) -> bool {
        self.resolved.name == "array"
    }

    /// Returns the Go literal for the field's zero value.
    #[must_use]
    pub fn zero_value(&self) -> String {
        tracing::debug!(
            "{} is a {} and is_pointer={}",
            self.name,
            self.resolved.name,
            self.resolved.is_pointer
        );
        if self.resolved.is_pointer {
            return "nil".to_string();
        }

        match self.resolved.name.as_str() {
            "string" => "\"\"".to_string(),
            "int" | "int64" | "float" | "float64" => "0".to_string(),
            "bool" => "false".to_string(),
            // Slices zero to nil; the element type is not tracked.
            "array" => "nil".to_string(),
            name if self.is_struct() => format!("{}{{}}", name),
            _ => "0".to_string(),
        }
    }

    /// Returns the expression reading this field off a variable named
    /// `owner`.
    ///
    /// Pointer fields holding a struct type serialize through the
    /// type's `UrlValues` method keyed by the query name; other pointer
    /// fields dereference; plain fields read directly.
    #[must_use]
    pub fn accessor(&self, owner: &str) -> String {
        if self.resolved.is_pointer {
            if self.is_struct() {
                format!("{}.{}.UrlValues(\"{}\")", owner, self.name, self.query_name)
            } else {
                format!("*{}.{}", owner, self.name)
            }
        } else {
            format!("{}.{}", owner, self.name)
        }
    }
}
