//! Loading of the config file and schema shared by every command.

use std::path::PathBuf;

use clap::Args;
use eyre::{Result, bail};
use tablegraft_core::Keyword;
use tablegraft_schema::{CONFIG_FILENAME, ConfigFile, Schema};

use crate::commands::UnwrapOrExit;

/// Where to find the config and schema
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to graft.toml (defaults to ./graft.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Introspection JSON document (overrides [schema].path)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,
}

/// A loaded config and the schema it points at.
pub struct Project {
    pub config: ConfigFile,
    pub schema_path: PathBuf,
    pub schema: Schema,
}

impl SourceArgs {
    pub fn load(&self) -> Result<Project> {
        let config = match &self.config {
            Some(path) => ConfigFile::open(path).unwrap_or_exit(),
            None => ConfigFile::open_or_default(CONFIG_FILENAME).unwrap_or_exit(),
        };

        let Some(schema_path) = self.schema.clone().or_else(|| config.schema_path()) else {
            bail!("no schema given; pass --schema or set [schema].path in {CONFIG_FILENAME}");
        };
        tracing::debug!(path = %schema_path.display(), "loading schema");
        let schema = Schema::from_file(&schema_path).unwrap_or_exit();

        Ok(Project {
            config,
            schema_path,
            schema,
        })
    }
}

impl Project {
    /// Selection from the command line, falling back to the config's `select`.
    pub fn selection(&self, from_cli: &[String]) -> Vec<String> {
        if from_cli.is_empty() {
            self.config.config().generate.select.clone()
        } else {
            from_cli.to_vec()
        }
    }

    /// Keyword from the command line, falling back to the config.
    pub fn keyword(&self, from_cli: Option<Keyword>) -> Keyword {
        from_cli.unwrap_or(self.config.config().generate.keyword)
    }

    /// Output path from the command line, falling back to the config.
    pub fn output(&self, from_cli: Option<PathBuf>) -> Option<PathBuf> {
        from_cli.or_else(|| self.config.output_path())
    }
}
