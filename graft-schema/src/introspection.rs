//! Conversion from an introspection query result to a [`Schema`].
//!
//! Accepts both the full response shape `{"data": {"__schema": ...}}` and the
//! bare `{"__schema": ...}` object. Only the parts of the document needed to
//! build the type graph are read; everything else is ignored.

use serde::Deserialize;

use crate::{
    Error, Result, Schema,
    error::SourceContext,
    types::{Field, NamedType, TypeKind, TypeRef},
};

#[derive(Deserialize)]
struct Document {
    data: Option<Data>,
    #[serde(rename = "__schema")]
    schema: Option<RawSchema>,
}

#[derive(Deserialize)]
struct Data {
    #[serde(rename = "__schema")]
    schema: RawSchema,
}

#[derive(Deserialize)]
struct RawSchema {
    types: Vec<RawType>,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum RawKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

#[derive(Deserialize)]
struct RawType {
    kind: RawKind,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    fields: Option<Vec<RawField>>,
}

#[derive(Deserialize)]
struct RawField {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "type")]
    ty: RawTypeRef,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeRef {
    kind: RawKind,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    of_type: Option<Box<RawTypeRef>>,
}

/// Parse an introspection document into a schema.
pub fn parse_introspection(content: &str, filename: &str) -> Result<Schema> {
    let source_ctx = SourceContext::new(content, filename);
    let document: Document =
        serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?;

    let raw = match (document.data, document.schema) {
        (Some(data), _) => data.schema,
        (None, Some(schema)) => schema,
        (None, None) => return Err(Error::introspection("missing '__schema' object")),
    };

    let types = raw
        .types
        .into_iter()
        .map(convert_type)
        .collect::<Result<Vec<_>>>()?;
    Schema::from_types(types)
}

fn convert_type(raw: RawType) -> Result<NamedType> {
    let kind = match raw.kind {
        RawKind::Scalar => TypeKind::Scalar,
        RawKind::Object => TypeKind::Object,
        RawKind::Interface => TypeKind::Interface,
        RawKind::Union => TypeKind::Union,
        RawKind::Enum => TypeKind::Enum,
        RawKind::InputObject => TypeKind::InputObject,
        RawKind::List | RawKind::NonNull => {
            return Err(Error::introspection(format!(
                "type '{}' has a modifier kind at the top level",
                raw.name
            )));
        }
    };

    let mut ty = NamedType::with_kind(raw.name, kind);
    ty.description = raw.description;

    for field in raw.fields.unwrap_or_default() {
        let location = format!("{}.{}", ty.name, field.name);
        let field_ty = convert_type_ref(field.ty, &location)?;
        ty.fields.insert(
            field.name.clone(),
            Field {
                name: field.name,
                description: field.description,
                ty: field_ty,
            },
        );
    }

    Ok(ty)
}

fn convert_type_ref(raw: RawTypeRef, location: &str) -> Result<TypeRef> {
    match raw.kind {
        RawKind::List | RawKind::NonNull => {
            let Some(inner) = raw.of_type else {
                return Err(Error::invalid_type_ref(
                    location,
                    "modifier without 'ofType'",
                ));
            };
            let inner = convert_type_ref(*inner, location)?;
            Ok(if raw.kind == RawKind::List {
                inner.list()
            } else {
                inner.non_null()
            })
        }
        _ => match raw.name {
            Some(name) => Ok(TypeRef::Named(name)),
            None => Err(Error::invalid_type_ref(
                location,
                "named reference without 'name'",
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHINOOK: &str = r#"{
      "data": {
        "__schema": {
          "queryType": { "name": "query_root" },
          "types": [
            { "kind": "SCALAR", "name": "String", "description": null, "fields": null },
            {
              "kind": "OBJECT",
              "name": "Album",
              "description": "columns and relationships of \"Album\"",
              "fields": [
                {
                  "name": "Title",
                  "description": null,
                  "args": [],
                  "type": { "kind": "NON_NULL", "name": null,
                            "ofType": { "kind": "SCALAR", "name": "String", "ofType": null } },
                  "isDeprecated": false
                },
                {
                  "name": "Tracks",
                  "args": [],
                  "type": { "kind": "NON_NULL", "name": null,
                            "ofType": { "kind": "LIST", "name": null,
                                        "ofType": { "kind": "NON_NULL", "name": null,
                                                    "ofType": { "kind": "OBJECT", "name": "Track" } } } }
                }
              ]
            },
            {
              "kind": "OBJECT",
              "name": "Track",
              "description": "columns and relationships of \"Track\"",
              "fields": [
                { "name": "Name", "type": { "kind": "SCALAR", "name": "String" } }
              ]
            }
          ]
        }
      }
    }"#;

    #[test]
    fn test_parse_wrapped_document() {
        let schema = parse_introspection(CHINOOK, "schema.json").unwrap();
        let names: Vec<_> = schema.types().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["String", "Album", "Track"]);

        let album = schema.get("Album").unwrap();
        assert_eq!(album.kind, TypeKind::Object);
        assert_eq!(
            album.description.as_deref(),
            Some("columns and relationships of \"Album\"")
        );
        let fields: Vec<_> = album.fields.keys().map(String::as_str).collect();
        assert_eq!(fields, ["Title", "Tracks"]);
        assert_eq!(album.fields["Tracks"].ty.to_string(), "[Track!]!");
        assert_eq!(album.fields["Title"].ty.to_string(), "String!");
    }

    #[test]
    fn test_parse_bare_document() {
        let content = r#"{ "__schema": { "types": [
            { "kind": "SCALAR", "name": "Int" },
            { "kind": "ENUM", "name": "order_by", "description": "column ordering options" }
        ] } }"#;
        let schema = parse_introspection(content, "schema.json").unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.get("order_by").unwrap().kind, TypeKind::Enum);
    }

    #[test]
    fn test_missing_schema() {
        let err = parse_introspection(r#"{ "data": null }"#, "schema.json").unwrap_err();
        assert!(matches!(*err, Error::Introspection { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_introspection("{ \"__schema\": ", "schema.json").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_modifier_without_of_type() {
        let content = r#"{ "__schema": { "types": [
            { "kind": "OBJECT", "name": "Album", "fields": [
                { "name": "id", "type": { "kind": "NON_NULL", "name": null, "ofType": null } }
            ] }
        ] } }"#;
        let err = parse_introspection(content, "schema.json").unwrap_err();
        match *err {
            Error::InvalidTypeRef { input, .. } => assert_eq!(input, "Album.id"),
            other => panic!("expected InvalidTypeRef, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_reference() {
        let content = r#"{ "__schema": { "types": [
            { "kind": "OBJECT", "name": "Album", "fields": [
                { "name": "Artist", "type": { "kind": "OBJECT", "name": "Artist" } }
            ] }
        ] } }"#;
        let err = parse_introspection(content, "schema.json").unwrap_err();
        assert!(matches!(*err, Error::UnknownType { .. }));
    }
}
