//! Table-type classification.

use crate::NamedType;

/// Description prefix that marks an object type as table-backed.
pub const TABLE_DESCRIPTION_PREFIX: &str = "columns and relationships of ";

/// Decides whether a named type is a table type.
///
/// Introspection carries no explicit "is a table" flag, so the default
/// [`DescriptionPrefix`] rule inspects the type's description. Schemas with
/// real metadata can supply their own predicate; any
/// `Fn(&NamedType) -> bool` closure also works.
pub trait TablePredicate {
    fn is_table(&self, ty: &NamedType) -> bool;
}

/// Object types whose description starts with
/// [`TABLE_DESCRIPTION_PREFIX`] (exact, case-sensitive).
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionPrefix;

impl TablePredicate for DescriptionPrefix {
    fn is_table(&self, ty: &NamedType) -> bool {
        ty.is_object()
            && ty
                .description
                .as_deref()
                .is_some_and(|d| d.starts_with(TABLE_DESCRIPTION_PREFIX))
    }
}

impl<F> TablePredicate for F
where
    F: Fn(&NamedType) -> bool,
{
    fn is_table(&self, ty: &NamedType) -> bool {
        self(ty)
    }
}
