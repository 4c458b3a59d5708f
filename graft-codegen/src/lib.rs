//! Schema traversal and definition generation.
//!
//! # Architecture
//!
//! ```text
//! SchemaIndex ──► unwrap ──┬──► DependencyResolver (standalone query)
//!                          └──► DefinitionGenerator ──► text
//! ```
//!
//! # Example
//!
//! ```
//! use tablegraft_codegen::DefinitionGenerator;
//! use tablegraft_core::Keyword;
//! use tablegraft_schema::{NamedType, Schema, SchemaIndex, TypeRef};
//!
//! let schema = Schema::from_types([
//!     NamedType::scalar("String"),
//!     NamedType::object("Artist").description("columns and relationships of \"Artist\""),
//!     NamedType::object("Album")
//!         .description("columns and relationships of \"Album\"")
//!         .field("title", TypeRef::named("String").non_null())
//!         .field("Artist", TypeRef::named("Artist")),
//! ])
//! .unwrap();
//!
//! let generator = DefinitionGenerator::new(SchemaIndex::new(&schema));
//! let text = generator.generate_definition("Album", Keyword::Type).unwrap();
//! assert_eq!(
//!     text,
//!     "type Album_ImportedType {\n  title : String!\n  Artist : Artist_ImportedType\n}"
//! );
//! ```

mod builder;
mod generate;
mod resolve;
mod unwrap;

pub use builder::{CodeBuilder, Indent};
pub use generate::DefinitionGenerator;
pub use resolve::{DependencyResolver, MAX_RESOLVE_DEPTH, Resolution};
pub use unwrap::{FieldTarget, MAX_UNWRAP_DEPTH, classify, inner_type, unwrap, unwrap_to_depth};
