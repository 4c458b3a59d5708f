//! Schema data model: named types, fields, and type references.

use std::{borrow::Cow, fmt, str::FromStr};

use indexmap::IndexMap;

use crate::{Error, Result};

/// Kind tag of a named type, as reported by introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeKind {
    /// Get the lowercase kind name
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "scalar",
            TypeKind::Object => "object",
            TypeKind::Interface => "interface",
            TypeKind::Union => "union",
            TypeKind::Enum => "enum",
            TypeKind::InputObject => "input_object",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field's declared type, possibly wrapped in modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Bare reference to a named type
    Named(String),
    /// `T!`
    NonNull(Box<TypeRef>),
    /// `[T]`
    List(Box<TypeRef>),
}

impl TypeRef {
    /// Create a bare reference to a named type.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Wrap this reference in a non-null modifier.
    pub fn non_null(self) -> Self {
        TypeRef::NonNull(Box::new(self))
    }

    /// Wrap this reference in a list modifier.
    pub fn list(self) -> Self {
        TypeRef::List(Box::new(self))
    }

    /// The wrapped reference, if this is a modifier.
    pub fn inner(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Named(_) => None,
            TypeRef::NonNull(inner) | TypeRef::List(inner) => Some(inner),
        }
    }

    /// The name, if this is a bare reference.
    pub fn name(&self) -> Option<&str> {
        match self {
            TypeRef::Named(name) => Some(name),
            _ => None,
        }
    }

    /// The innermost named type, following every modifier layer.
    pub fn innermost_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::NonNull(inner) | TypeRef::List(inner) => inner.innermost_name(),
        }
    }

    /// Render the signature with the innermost name passed through `rename`.
    ///
    /// The modifier text is reproduced exactly as [`Display`](fmt::Display)
    /// would write it.
    pub fn render_with<'a>(&'a self, rename: impl Fn(&'a str) -> Cow<'a, str>) -> String {
        let mut out = String::new();
        self.write_with(&mut out, &rename);
        out
    }

    fn write_with<'a>(&'a self, out: &mut String, rename: &impl Fn(&'a str) -> Cow<'a, str>) {
        match self {
            TypeRef::Named(name) => out.push_str(&rename(name)),
            TypeRef::NonNull(inner) => {
                inner.write_with(out, rename);
                out.push('!');
            }
            TypeRef::List(inner) => {
                out.push('[');
                inner.write_with(out, rename);
                out.push(']');
            }
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
        }
    }
}

impl FromStr for TypeRef {
    type Err = Box<Error>;

    /// Parse a signature such as `Int`, `String!`, or `[Track!]!`.
    fn from_str(s: &str) -> Result<Self> {
        parse_type_ref(s.trim(), s)
    }
}

fn parse_type_ref(s: &str, input: &str) -> Result<TypeRef> {
    match s.strip_suffix('!') {
        Some(rest) => {
            if rest.ends_with('!') {
                return Err(Error::invalid_type_ref(input, "repeated non-null modifier"));
            }
            Ok(parse_nullable(rest.trim_end(), input)?.non_null())
        }
        None => parse_nullable(s, input),
    }
}

fn parse_nullable(s: &str, input: &str) -> Result<TypeRef> {
    if let Some(rest) = s.strip_prefix('[') {
        let Some(body) = rest.strip_suffix(']') else {
            return Err(Error::invalid_type_ref(input, "unbalanced brackets"));
        };
        return Ok(parse_type_ref(body.trim(), input)?.list());
    }

    let mut chars = s.chars();
    match chars.next() {
        None => Err(Error::invalid_type_ref(input, "empty type name")),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => Err(Error::invalid_type_ref(
            input,
            format!("unexpected character '{}'", c),
        )),
        Some(_) => match chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            Some(c) => Err(Error::invalid_type_ref(
                input,
                format!("unexpected character '{}'", c),
            )),
            None => Ok(TypeRef::named(s)),
        },
    }
}

/// A field on an object or interface type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub description: Option<String>,
    pub ty: TypeRef,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
        }
    }
}

/// A named entry in the schema's type map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub name: String,
    pub description: Option<String>,
    pub kind: TypeKind,
    /// Fields in declaration order (empty for non-object kinds)
    pub fields: IndexMap<String, Field>,
}

impl NamedType {
    /// Create a type of the given kind with no description or fields.
    pub fn with_kind(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
            fields: IndexMap::new(),
        }
    }

    /// Create an object type.
    pub fn object(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Object)
    }

    /// Create a scalar type.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Scalar)
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a field. A field with the same name replaces the earlier one
    /// in place.
    pub fn field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        let field = Field::new(name, ty);
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn is_object(&self) -> bool {
        self.kind == TypeKind::Object
    }
}
