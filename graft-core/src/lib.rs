//! Core utilities and types for the tablegraft generator.
//!
//! This crate provides the naming rules and output helpers shared by the
//! schema, codegen, and CLI crates.

mod file;
mod keyword;
mod naming;

pub use file::{OutputFile, WriteResult};
pub use keyword::Keyword;
pub use naming::{IMPORTED_SUFFIX, alias_name, is_alias};
