//! Schema model and loading for the tablegraft generator.
//!
//! ```text
//! introspection JSON → Schema (immutable) → SchemaIndex (queries) → codegen
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod introspection;
mod predicate;
mod schema;
mod types;

pub use config::{CONFIG_FILENAME, Config, ConfigFile, GenerateConfig, SchemaConfig};
pub use error::{Error, Result};
pub use predicate::{DescriptionPrefix, TABLE_DESCRIPTION_PREFIX, TablePredicate};
pub use schema::{Schema, SchemaIndex};
pub use types::{Field, NamedType, TypeKind, TypeRef};
