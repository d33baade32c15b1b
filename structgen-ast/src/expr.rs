//! Type expression nodes.
//!
//! This module contains the tree representation of a declared field type
//! as the parsing harness hands it over: pointer indirection, named
//! identifiers, arrays, package-qualified references, and inline
//! structs, with a catch-all for shapes the resolver does not model.

/// A parsed, unresolved type expression from a struct field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Pointer indirection (`*T`).
    Pointer(Box<TypeExpr>),
    /// A named identifier, optionally carrying the declared type it
    /// refers to.
    Named {
        /// Identifier text as written in the source.
        name: String,
        /// Declared type when the identifier refers to a type
        /// declaration; `None` for primitives and references the
        /// harness could not resolve.
        decl: Option<Box<TypeExpr>>,
    },
    /// Array or slice of an element type (`[]T`, `[n]T`).
    Array(Box<TypeExpr>),
    /// Package-qualified reference (`pkg.Name`).
    Qualified {
        /// Package qualifier.
        package: String,
        /// Referenced member.
        member: Box<TypeExpr>,
    },
    /// Anonymous struct literal (`struct { ... }`).
    InlineStruct,
    /// Any other shape, carrying the upstream node's kind description.
    Other(String),
}

impl TypeExpr {
    /// Creates a pointer to the given expression.
    #[must_use]
    pub fn pointer(inner: TypeExpr) -> Self {
        Self::Pointer(Box::new(inner))
    }

    /// Creates a bare named identifier.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            decl: None,
        }
    }

    /// Creates a named identifier whose type declaration is known.
    #[must_use]
    pub fn declared(name: impl Into<String>, decl: TypeExpr) -> Self {
        Self::Named {
            name: name.into(),
            decl: Some(Box::new(decl)),
        }
    }

    /// Creates an array of the given element type.
    #[must_use]
    pub fn array_of(elem: TypeExpr) -> Self {
        Self::Array(Box::new(elem))
    }

    /// Creates a package-qualified reference.
    #[must_use]
    pub fn qualified(package: impl Into<String>, member: TypeExpr) -> Self {
        Self::Qualified {
            package: package.into(),
            member: Box::new(member),
        }
    }

    /// Creates a catch-all node for an unmodeled shape.
    #[must_use]
    pub fn other(kind: impl Into<String>) -> Self {
        Self::Other(kind.into())
    }
}
