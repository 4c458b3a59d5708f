//! Naming rules for imported type aliases.

use std::borrow::Cow;

/// Suffix appended to a table type's name when it is re-exported.
pub const IMPORTED_SUFFIX: &str = "_ImportedType";

/// Check if a name already carries the imported alias suffix.
pub fn is_alias(name: &str) -> bool {
    name.ends_with(IMPORTED_SUFFIX)
}

/// Map a type name to its imported alias.
///
/// Idempotent: a name that already ends in [`IMPORTED_SUFFIX`] is returned
/// unchanged, so applying this twice is the same as applying it once.
///
/// # Example
///
/// ```
/// use tablegraft_core::alias_name;
///
/// assert_eq!(alias_name("Artist"), "Artist_ImportedType");
/// assert_eq!(alias_name("Artist_ImportedType"), "Artist_ImportedType");
/// ```
pub fn alias_name(name: &str) -> Cow<'_, str> {
    if is_alias(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{}{}", name, IMPORTED_SUFFIX))
    }
}
