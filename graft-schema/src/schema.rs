use std::path::Path;

use indexmap::{IndexMap, map::Entry};

use crate::{
    DescriptionPrefix, Error, NamedType, Result, TablePredicate, introspection::parse_introspection,
};

/// Immutable graph of named types, in introspection order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    types: IndexMap<String, NamedType>,
}

impl Schema {
    /// Build a schema from named types.
    ///
    /// Fails on duplicate names and on any field whose innermost type is not
    /// part of the schema.
    pub fn from_types(types: impl IntoIterator<Item = NamedType>) -> Result<Self> {
        let mut map = IndexMap::new();
        for ty in types {
            match map.entry(ty.name.clone()) {
                Entry::Occupied(_) => {
                    return Err(Box::new(Error::DuplicateType { name: ty.name }));
                }
                Entry::Vacant(slot) => {
                    slot.insert(ty);
                }
            }
        }

        let schema = Self { types: map };
        schema.check_references()?;
        Ok(schema)
    }

    /// Parse an introspection document from a string.
    pub fn from_introspection_str(content: &str) -> Result<Self> {
        parse_introspection(content, "schema.json")
    }

    /// Parse an introspection document with a custom filename for error reporting.
    pub fn from_introspection_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_introspection(content, filename)
    }

    /// Read and parse an introspection document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_introspection(&content, &path.display().to_string())
    }

    fn check_references(&self) -> Result<()> {
        for ty in self.types.values() {
            for field in ty.fields.values() {
                let target = field.ty.innermost_name();
                if !self.types.contains_key(target) {
                    return Err(Box::new(Error::UnknownType {
                        owner: ty.name.clone(),
                        field: field.name.clone(),
                        type_name: target.to_string(),
                    }));
                }
            }
        }
        Ok(())
    }

    /// All types in enumeration order.
    pub fn types(&self) -> impl Iterator<Item = &NamedType> {
        self.types.values()
    }

    pub fn get(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Read-only queries over a [`Schema`] with a table-type predicate.
#[derive(Debug, Clone, Copy)]
pub struct SchemaIndex<'s, P = DescriptionPrefix> {
    schema: &'s Schema,
    predicate: P,
}

impl<'s> SchemaIndex<'s, DescriptionPrefix> {
    /// Create an index that classifies tables by description prefix.
    pub fn new(schema: &'s Schema) -> Self {
        Self::with_predicate(schema, DescriptionPrefix)
    }
}

impl<'s, P: TablePredicate> SchemaIndex<'s, P> {
    /// Create an index with a custom table predicate.
    pub fn with_predicate(schema: &'s Schema, predicate: P) -> Self {
        Self { schema, predicate }
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Every type name, in the schema's enumeration order.
    pub fn list_all_type_names(&self) -> Vec<&'s str> {
        self.schema.types().map(|t| t.name.as_str()).collect()
    }

    /// Names of table types, in enumeration order.
    pub fn list_table_type_names(&self) -> Vec<&'s str> {
        self.table_types().map(|t| t.name.as_str()).collect()
    }

    /// Table types, in enumeration order.
    pub fn table_types(&self) -> impl Iterator<Item = &'s NamedType> + '_ {
        self.schema.types().filter(|t| self.predicate.is_table(t))
    }

    /// Look up a type by exact name.
    pub fn get_type(&self, name: &str) -> Result<&'s NamedType> {
        self.schema.get(name).ok_or_else(|| Error::not_found(name))
    }

    pub fn is_table(&self, ty: &NamedType) -> bool {
        self.predicate.is_table(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeRef;

    fn table(name: &str) -> NamedType {
        NamedType::object(name).description(format!("columns and relationships of \"{name}\""))
    }

    fn chinook() -> Schema {
        Schema::from_types([
            NamedType::scalar("String"),
            table("Artist").field("Name", TypeRef::named("String")),
            NamedType::object("Album_aggregate").description("aggregated selection of \"Album\""),
            table("Album")
                .field("Title", TypeRef::named("String").non_null())
                .field("Artist", TypeRef::named("Artist")),
            NamedType::object("query_root"),
        ])
        .unwrap()
    }

    #[test]
    fn test_list_all_type_names_in_order() {
        let schema = chinook();
        let index = SchemaIndex::new(&schema);
        assert_eq!(
            index.list_all_type_names(),
            ["String", "Artist", "Album_aggregate", "Album", "query_root"]
        );
    }

    #[test]
    fn test_list_table_type_names_filters_without_sorting() {
        let schema = chinook();
        let index = SchemaIndex::new(&schema);
        assert_eq!(index.list_table_type_names(), ["Artist", "Album"]);
    }

    #[test]
    fn test_get_type_is_exact() {
        let schema = chinook();
        let index = SchemaIndex::new(&schema);
        assert_eq!(index.get_type("Album").unwrap().name, "Album");
        assert!(index.get_type("album").unwrap_err().is_not_found());
        assert!(index.get_type("Genre").unwrap_err().is_not_found());
    }

    #[test]
    fn test_custom_predicate() {
        let schema = chinook();
        let index =
            SchemaIndex::with_predicate(&schema, |ty: &NamedType| ty.name == "query_root");
        assert_eq!(index.list_table_type_names(), ["query_root"]);
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let err = Schema::from_types([NamedType::scalar("Int"), NamedType::scalar("Int")])
            .unwrap_err();
        assert!(matches!(*err, Error::DuplicateType { ref name } if name == "Int"));
    }

    #[test]
    fn test_unknown_reference_rejected() {
        let err = Schema::from_types([table("Album").field("Artist", TypeRef::named("Artist"))])
            .unwrap_err();
        match *err {
            Error::UnknownType {
                owner,
                field,
                type_name,
            } => {
                assert_eq!(owner, "Album");
                assert_eq!(field, "Artist");
                assert_eq!(type_name, "Artist");
            }
            other => panic!("expected UnknownType, got {other:?}"),
        }
    }

    #[test]
    fn test_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("schema.json");
        std::fs::write(
            &path,
            r#"{ "__schema": { "types": [ { "kind": "SCALAR", "name": "Int" } ] } }"#,
        )
        .unwrap();

        let schema = Schema::from_file(&path).unwrap();
        assert!(schema.contains("Int"));

        let err = Schema::from_file(temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
