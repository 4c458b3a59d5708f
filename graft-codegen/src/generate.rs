//! Definition block generation.

use std::collections::HashSet;

use tablegraft_core::{IMPORTED_SUFFIX, Keyword, alias_name};
use tablegraft_schema::{DescriptionPrefix, NamedType, Result, SchemaIndex, TablePredicate};
use tracing::{debug, warn};

use crate::{
    CodeBuilder,
    unwrap::{FieldTarget, classify},
};

/// Emits `type`/`input` blocks for table types.
///
/// Referenced table types are renamed to their imported alias at emission
/// time; the schema itself is never modified.
#[derive(Debug, Clone, Copy)]
pub struct DefinitionGenerator<'s, P = DescriptionPrefix> {
    index: SchemaIndex<'s, P>,
}

impl<'s, P: TablePredicate> DefinitionGenerator<'s, P> {
    pub fn new(index: SchemaIndex<'s, P>) -> Self {
        Self { index }
    }

    /// Generate the block for a single type, without a trailing newline.
    pub fn generate_definition(&self, type_name: &str, keyword: Keyword) -> Result<String> {
        let ty = self.index.get_type(type_name)?;
        let mut builder = CodeBuilder::sdl();
        self.render_block(ty, keyword, &mut builder);

        let mut text = builder.build();
        text.pop();
        Ok(text)
    }

    /// Generate blocks for every selected table type, in schema order.
    ///
    /// Each block is followed by a newline. Selected names that are unknown
    /// or not table types are skipped.
    pub fn generate_all<S: AsRef<str>>(&self, selected: &[S], keyword: Keyword) -> String {
        let mut builder = CodeBuilder::sdl();
        self.generate_all_to(selected, keyword, &mut builder);
        builder.build()
    }

    /// Like [`generate_all`](Self::generate_all), appending to an existing builder.
    pub fn generate_all_to<S: AsRef<str>>(
        &self,
        selected: &[S],
        keyword: Keyword,
        builder: &mut CodeBuilder,
    ) {
        // Walk the slice so skip warnings follow the caller's order
        let mut seen: HashSet<&str> = HashSet::new();
        for name in selected.iter().map(|s| s.as_ref()) {
            if !seen.insert(name) {
                continue;
            }
            match self.index.schema().get(name) {
                None => warn!(type_name = %name, "selected type not found in schema, skipping"),
                Some(ty) if !self.index.is_table(ty) => {
                    warn!(type_name = %name, "selected type is not a table type, skipping")
                }
                Some(_) => {}
            }
        }

        for ty in self.index.table_types() {
            if seen.contains(ty.name.as_str()) {
                self.render_block(ty, keyword, builder);
            }
        }
    }

    fn render_block(&self, ty: &NamedType, keyword: Keyword, builder: &mut CodeBuilder) {
        debug!(type_name = %ty.name, %keyword, "generating definition");

        builder.push_line(&format!("{} {}{} {{", keyword, ty.name, IMPORTED_SUFFIX));
        builder.push_indent();

        for field in ty.fields.values() {
            let signature = match classify(&self.index, field) {
                FieldTarget::Table(_) => field.ty.render_with(alias_name),
                FieldTarget::Object(inner) => {
                    debug!(
                        field = %field.name,
                        inner = %inner.name,
                        "omitting field of non-table object type"
                    );
                    continue;
                }
                FieldTarget::Other(_) | FieldTarget::Unresolved => field.ty.to_string(),
            };
            builder.push_line(&format!("{} : {}", field.name, signature));
        }

        builder.push_dedent();
        builder.push_line("}");
    }
}
