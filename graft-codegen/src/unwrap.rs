//! Unwrapping of non-null and list modifiers.

use tablegraft_schema::{Field, NamedType, SchemaIndex, TablePredicate, TypeRef};

/// Maximum number of modifier layers peeled off a field type.
///
/// Introspected signatures nest at most three deep (`[T!]!`). Anything
/// deeper is left partially wrapped rather than rejected.
pub const MAX_UNWRAP_DEPTH: usize = 3;

/// Peel up to [`MAX_UNWRAP_DEPTH`] modifier layers off a type reference.
///
/// Stops at the first bare named reference. When the bound is exhausted the
/// reference reached at the last layer is returned, which may still be a
/// modifier.
pub fn unwrap(ty: &TypeRef) -> &TypeRef {
    unwrap_to_depth(ty, MAX_UNWRAP_DEPTH)
}

/// Peel up to `max_depth` modifier layers off a type reference.
pub fn unwrap_to_depth(ty: &TypeRef, max_depth: usize) -> &TypeRef {
    let mut current = ty;
    for _ in 0..max_depth {
        match current.inner() {
            Some(inner) => current = inner,
            None => break,
        }
    }
    current
}

/// What a field's unwrapped type turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget<'s> {
    /// An object type the predicate classifies as a table
    Table(&'s NamedType),
    /// Any other object type, e.g. an aggregate wrapper
    Object(&'s NamedType),
    /// Scalars, enums, interfaces, unions and inputs
    Other(&'s NamedType),
    /// Still wrapped after [`MAX_UNWRAP_DEPTH`] layers, or naming a type
    /// the schema does not contain
    Unresolved,
}

/// Resolve a field's declared type to the named type it refers to.
pub fn inner_type<'s, P: TablePredicate>(
    index: &SchemaIndex<'s, P>,
    field: &Field,
) -> Option<&'s NamedType> {
    unwrap(&field.ty)
        .name()
        .and_then(|name| index.schema().get(name))
}

/// Classify a field by its unwrapped type.
pub fn classify<'s, P: TablePredicate>(index: &SchemaIndex<'s, P>, field: &Field) -> FieldTarget<'s> {
    match inner_type(index, field) {
        Some(ty) if index.is_table(ty) => FieldTarget::Table(ty),
        Some(ty) if ty.is_object() => FieldTarget::Object(ty),
        Some(ty) => FieldTarget::Other(ty),
        None => FieldTarget::Unresolved,
    }
}
