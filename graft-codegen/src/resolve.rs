//! Transitive table dependencies of a selection.

use std::collections::HashSet;

use tablegraft_core::is_alias;
use tablegraft_schema::{DescriptionPrefix, NamedType, Result, SchemaIndex, TablePredicate};
use tracing::warn;

use crate::unwrap::{FieldTarget, classify};

/// Traversal depth past which a branch is abandoned.
///
/// Each type is expanded at most once, which already breaks cycles; this only
/// bounds pathological schemas.
pub const MAX_RESOLVE_DEPTH: usize = 30;

/// Table types reachable from a seed set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Discovered table type names. Seeds appear only when some traversed
    /// type references them.
    pub types: HashSet<String>,
    /// Set when at least one branch hit [`MAX_RESOLVE_DEPTH`]
    pub truncated: bool,
}

impl Resolution {
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Names in lexical order, for display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.types.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Computes the closure of table types referenced through object fields.
///
/// Standalone query: definition generation does not consume it.
#[derive(Debug, Clone, Copy)]
pub struct DependencyResolver<'s, P = DescriptionPrefix> {
    index: SchemaIndex<'s, P>,
}

impl<'s, P: TablePredicate> DependencyResolver<'s, P> {
    pub fn new(index: SchemaIndex<'s, P>) -> Self {
        Self { index }
    }

    /// Resolve the dependencies of `seeds`.
    ///
    /// Every seed must exist in the schema; the first unknown name fails the
    /// whole call with `NotFound`.
    pub fn resolve<I, S>(&self, seeds: I) -> Result<Resolution>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let seeds: Vec<&'s NamedType> = seeds
            .into_iter()
            .map(|name| self.index.get_type(name.as_ref()))
            .collect::<Result<_>>()?;

        // Types already pushed for expansion; each is expanded at most once
        let mut entered: HashSet<&'s str> = HashSet::new();
        let mut stack: Vec<(&'s NamedType, usize)> = Vec::with_capacity(seeds.len());
        // Pop seeds in the order given
        for ty in seeds.into_iter().rev() {
            if entered.insert(ty.name.as_str()) {
                stack.push((ty, 1));
            }
        }

        let mut resolution = Resolution::default();

        while let Some((ty, depth)) = stack.pop() {
            if depth > MAX_RESOLVE_DEPTH {
                if !resolution.truncated {
                    warn!(
                        type_name = %ty.name,
                        max_depth = MAX_RESOLVE_DEPTH,
                        "dependency traversal exceeded depth limit, returning partial result"
                    );
                }
                resolution.truncated = true;
                continue;
            }

            for field in ty.fields.values() {
                let FieldTarget::Table(inner) = classify(&self.index, field) else {
                    continue;
                };
                if is_alias(&inner.name) {
                    continue;
                }
                resolution.types.insert(inner.name.clone());
                if entered.insert(inner.name.as_str()) {
                    stack.push((inner, depth + 1));
                }
            }
        }

        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use tablegraft_schema::{Schema, TypeRef};

    use super::*;

    fn table(name: &str) -> NamedType {
        NamedType::object(name).description(format!("columns and relationships of \"{name}\""))
    }

    fn resolve(schema: &Schema, seeds: &[&str]) -> Result<Resolution> {
        DependencyResolver::new(SchemaIndex::new(schema)).resolve(seeds)
    }

    #[test]
    fn test_direct_and_transitive() {
        let schema = Schema::from_types([
            NamedType::scalar("String"),
            table("Artist").field("Name", TypeRef::named("String")),
            table("Album").field("Artist", TypeRef::named("Artist")),
            table("Track").field("Album", TypeRef::named("Album").non_null()),
        ])
        .unwrap();

        let res = resolve(&schema, &["Track"]).unwrap();
        assert_eq!(res.sorted(), ["Album", "Artist"]);
        assert!(!res.truncated);
    }

    #[test]
    fn test_cycle_terminates() {
        let schema = Schema::from_types([
            table("A").field("b", TypeRef::named("B")),
            table("B").field("a", TypeRef::named("A").non_null().list()),
        ])
        .unwrap();

        let res = resolve(&schema, &["A"]).unwrap();
        assert_eq!(res.sorted(), ["A", "B"]);
        assert!(!res.truncated);
    }

    #[test]
    fn test_cycle_expands_each_type_once() {
        let schema = Schema::from_types([
            table("A").field("b", TypeRef::named("B")),
            table("B").field("a", TypeRef::named("A")),
        ])
        .unwrap();

        // Called once per field of every expanded type
        let inspected = RefCell::new(Vec::new());
        let recording = |ty: &NamedType| {
            inspected.borrow_mut().push(ty.name.clone());
            DescriptionPrefix.is_table(ty)
        };
        let resolver = DependencyResolver::new(SchemaIndex::with_predicate(&schema, recording));

        let res = resolver.resolve(["A"]).unwrap();
        assert_eq!(res.sorted(), ["A", "B"]);
        assert_eq!(*inspected.borrow(), ["B", "A"]);
    }

    #[test]
    fn test_duplicate_seeds_expand_once() {
        let schema = Schema::from_types([
            table("Artist"),
            table("Album").field("Artist", TypeRef::named("Artist")),
        ])
        .unwrap();

        let inspected = RefCell::new(0usize);
        let counting = |ty: &NamedType| {
            *inspected.borrow_mut() += 1;
            DescriptionPrefix.is_table(ty)
        };
        let resolver = DependencyResolver::new(SchemaIndex::with_predicate(&schema, counting));

        let res = resolver.resolve(["Album", "Album"]).unwrap();
        assert_eq!(res.sorted(), ["Artist"]);
        assert_eq!(*inspected.borrow(), 1);
    }

    #[test]
    fn test_self_reference() {
        let schema = Schema::from_types([
            table("Employee").field("ReportsTo", TypeRef::named("Employee")),
        ])
        .unwrap();

        let res = resolve(&schema, &["Employee"]).unwrap();
        assert_eq!(res.sorted(), ["Employee"]);
    }

    #[test]
    fn test_non_table_objects_are_not_followed() {
        let schema = Schema::from_types([
            table("Artist"),
            NamedType::object("Album_aggregate")
                .description("aggregated selection of \"Album\"")
                .field("nodes", TypeRef::named("Artist").list()),
            table("Album").field("agg", TypeRef::named("Album_aggregate").non_null()),
        ])
        .unwrap();

        let res = resolve(&schema, &["Album"]).unwrap();
        assert!(res.is_empty());
    }

    #[test]
    fn test_alias_named_types_are_skipped() {
        let schema = Schema::from_types([
            table("Artist_ImportedType"),
            table("Album").field("Artist", TypeRef::named("Artist_ImportedType")),
        ])
        .unwrap();

        let res = resolve(&schema, &["Album"]).unwrap();
        assert!(res.is_empty());
    }

    #[test]
    fn test_unknown_seed_is_not_found() {
        let schema = Schema::from_types([table("Album")]).unwrap();
        let err = resolve(&schema, &["Album", "Genre"]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_empty_seed_set() {
        let schema = Schema::from_types([table("Album")]).unwrap();
        let res = resolve(&schema, &[]).unwrap();
        assert_eq!(res, Resolution::default());
    }

    #[test]
    fn test_deep_chain_is_truncated() {
        let count = 45;
        let types = (0..count).map(|i| {
            let ty = table(&format!("T{i}"));
            if i + 1 < count {
                ty.field("next", TypeRef::named(format!("T{}", i + 1)))
            } else {
                ty
            }
        });
        let schema = Schema::from_types(types).unwrap();

        let res = resolve(&schema, &["T0"]).unwrap();
        assert!(res.truncated);
        assert!(!res.is_empty());
        assert_eq!(res.len(), MAX_RESOLVE_DEPTH);
        assert!(res.contains("T1"));
        assert!(res.contains("T30"));
        assert!(!res.contains("T31"));
    }
}
