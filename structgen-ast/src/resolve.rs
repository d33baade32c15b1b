//! Type-expression resolution.
//!
//! This module reduces a type expression tree to the flat descriptor
//! the snippet generators work from: a canonical type name plus a
//! pointer flag. Resolution is total; unknown shapes fall back to
//! their kind description instead of failing.

use crate::diag::{Discard, Observer};
use crate::expr::TypeExpr;

/// Canonical result of reducing a type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Canonical type name: a primitive name, `"array"`, `"Struct"`, a
    /// chased declaration's resolved name, or a fallback kind string.
    pub name: String,
    /// True iff the outermost node of the source expression was a
    /// pointer. Nested pointers collapse into this single flag.
    pub is_pointer: bool,
}

/// Resolves a type expression to its canonical descriptor.
#[must_use]
pub fn resolve(expr: &TypeExpr) -> ResolvedType {
    resolve_with(expr, &Discard)
}

/// Resolves a type expression, reporting declaration chases to `observer`.
#[must_use]
pub fn resolve_with(expr: &TypeExpr, observer: &dyn Observer) -> ResolvedType {
    match expr {
        TypeExpr::Pointer(inner) => {
            // Only the outermost pointer is tracked; an inner flag is
            // absorbed here.
            let inner = resolve_with(inner, observer);
            ResolvedType {
                name: inner.name,
                is_pointer: true,
            }
        }
        TypeExpr::Named {
            name,
            decl: Some(decl),
        } => {
            // The chased declaration's pointer flag describes the
            // declaration site, not the field site, and is dropped.
            let target = resolve_with(decl, observer);
            observer.alias_resolved(name, &target.name);
            ResolvedType {
                name: target.name,
                is_pointer: false,
            }
        }
        TypeExpr::Named { name, decl: None } => ResolvedType {
            name: name.clone(),
            is_pointer: false,
        },
        TypeExpr::Array(_) => ResolvedType {
            name: "array".to_string(),
            is_pointer: false,
        },
        TypeExpr::Qualified { member, .. } => {
            let member = resolve_with(member, observer);
            ResolvedType {
                name: member.name,
                is_pointer: false,
            }
        }
        TypeExpr::InlineStruct => ResolvedType {
            name: "Struct".to_string(),
            is_pointer: false,
        },
        TypeExpr::Other(kind) => ResolvedType {
            name: kind.clone(),
            is_pointer: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::Recording;

    #[test]
    fn test_primitives_resolve_to_their_names() {
        for name in ["string", "int", "int64", "float", "float64", "bool"] {
            let resolved = resolve(&TypeExpr::named(name));
            assert_eq!(resolved.name, name);
            assert!(!resolved.is_pointer);
        }
    }

    #[test]
    fn test_pointer_adopts_inner_name() {
        let resolved = resolve(&TypeExpr::pointer(TypeExpr::named("string")));
        assert_eq!(resolved.name, "string");
        assert!(resolved.is_pointer);
    }

    #[test]
    fn test_double_pointer_collapses_to_one_flag() {
        let expr = TypeExpr::pointer(TypeExpr::pointer(TypeExpr::named("Card")));
        let resolved = resolve(&expr);
        assert_eq!(resolved.name, "Card");
        assert!(resolved.is_pointer);
    }

    #[test]
    fn test_array_ignores_element_type() {
        for elem in [
            TypeExpr::named("string"),
            TypeExpr::pointer(TypeExpr::named("Card")),
            TypeExpr::InlineStruct,
        ] {
            let resolved = resolve(&TypeExpr::array_of(elem));
            assert_eq!(resolved.name, "array");
            assert!(!resolved.is_pointer);
        }
    }

    #[test]
    fn test_pointer_to_array_keeps_array_name() {
        let expr = TypeExpr::pointer(TypeExpr::array_of(TypeExpr::named("string")));
        let resolved = resolve(&expr);
        assert_eq!(resolved.name, "array");
        assert!(resolved.is_pointer);
    }

    #[test]
    fn test_inline_struct_resolves_to_marker() {
        let resolved = resolve(&TypeExpr::InlineStruct);
        assert_eq!(resolved.name, "Struct");
        assert!(!resolved.is_pointer);
    }

    #[test]
    fn test_qualified_ignores_package() {
        let resolved = resolve(&TypeExpr::qualified("time", TypeExpr::named("Time")));
        assert_eq!(resolved.name, "Time");
        assert!(!resolved.is_pointer);
    }

    #[test]
    fn test_declaration_chase_adopts_target_name() {
        let expr = TypeExpr::declared("Timestamp", TypeExpr::named("int64"));
        let resolved = resolve(&expr);
        assert_eq!(resolved.name, "int64");
        assert!(!resolved.is_pointer);
    }

    #[test]
    fn test_declaration_chase_to_struct() {
        let expr = TypeExpr::declared("Address", TypeExpr::InlineStruct);
        assert_eq!(resolve(&expr).name, "Struct");
    }

    #[test]
    fn test_chase_through_pointer_declaration_stays_value() {
        // type CardRef = *Card; a field declared as CardRef carries no
        // pointer syntax at the field site.
        let expr = TypeExpr::declared("CardRef", TypeExpr::pointer(TypeExpr::named("Card")));
        let resolved = resolve(&expr);
        assert_eq!(resolved.name, "Card");
        assert!(!resolved.is_pointer);
    }

    #[test]
    fn test_other_kind_passes_through() {
        let resolved = resolve(&TypeExpr::other("*ast.MapType"));
        assert_eq!(resolved.name, "*ast.MapType");
        assert!(!resolved.is_pointer);
    }

    #[test]
    fn test_observer_records_chase_through_pointer() {
        let recording = Recording::new();
        let expr = TypeExpr::pointer(TypeExpr::declared(
            "Timestamp",
            TypeExpr::named("int64"),
        ));
        let resolved = resolve_with(&expr, &recording);

        assert_eq!(resolved.name, "int64");
        assert!(resolved.is_pointer);
        assert_eq!(
            recording.chases(),
            vec![("Timestamp".to_string(), "int64".to_string())]
        );
    }

    #[test]
    fn test_plain_resolve_reports_nothing() {
        // Same expression through the silent path still resolves.
        let expr = TypeExpr::declared("Timestamp", TypeExpr::named("int64"));
        assert_eq!(resolve(&expr).name, "int64");
    }
}
