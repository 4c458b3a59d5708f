use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the raw document and its filename so parse failures can point at
/// the offending location.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_column_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from(offset..offset));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a config error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }
}

/// Convert a 1-based line and column into a byte offset.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            return Some(offset + column.saturating_sub(1).min(text.len()));
        }
        offset += text.len();
    }
    None
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(graft::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse introspection document")]
    #[diagnostic(code(graft::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse config")]
    #[diagnostic(code(graft::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("config error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid introspection document: {message}")]
    #[diagnostic(
        code(graft::introspection),
        help("expected the result of an introspection query with a '__schema' object")
    )]
    Introspection { message: String },

    #[error("invalid type reference '{input}': {reason}")]
    #[diagnostic(code(graft::invalid_type_ref))]
    InvalidTypeRef { input: String, reason: String },

    #[error("duplicate type definition '{name}'")]
    #[diagnostic(code(graft::duplicate_type))]
    DuplicateType { name: String },

    #[error("unknown type '{type_name}' referenced by field '{owner}.{field}'")]
    #[diagnostic(code(graft::unknown_type))]
    UnknownType {
        owner: String,
        field: String,
        type_name: String,
    },

    #[error("type '{name}' not found in schema")]
    #[diagnostic(
        code(graft::not_found),
        help("run 'graft list --all' to see the types in this schema")
    )]
    NotFound { name: String },
}

impl Error {
    /// Create a not-found error for a type name
    pub fn not_found(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::NotFound { name: name.into() })
    }

    /// Create an invalid type reference error
    pub fn invalid_type_ref(input: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidTypeRef {
            input: input.into(),
            reason: reason.into(),
        })
    }

    /// Create an introspection shape error
    pub fn introspection(message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Introspection {
            message: message.into(),
        })
    }

    /// Returns true if this is a [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
