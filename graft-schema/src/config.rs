//! Project configuration (`graft.toml`).

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use tablegraft_core::Keyword;

use crate::{Error, Result, error::SourceContext};

/// Default config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "graft.toml";

/// Root of `graft.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub schema: SchemaConfig,

    #[serde(default)]
    pub generate: GenerateConfig,
}

/// `[schema]` table
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    /// Introspection document, relative to the config file
    pub path: Option<PathBuf>,
}

/// `[generate]` table
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GenerateConfig {
    #[serde(default)]
    pub keyword: Keyword,

    /// Table types to generate definitions for
    #[serde(default)]
    pub select: Vec<String>,

    /// Output file, relative to the config file (stdout when absent)
    pub output: Option<PathBuf>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILENAME)
    }
}

impl Config {
    /// Parse a config from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        toml::from_str(content).map_err(|e| source_ctx.toml_error(e))
    }
}

/// A loaded config together with the directory its relative paths resolve against.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
    config: Config,
}

impl ConfigFile {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = Config::from_str_with_filename(&content, &path.display().to_string())?;
        Ok(Self { path, config })
    }

    /// Open a config file, treating a missing file as an empty config.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                config: Config::default(),
            })
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Schema path resolved against the config's directory.
    pub fn schema_path(&self) -> Option<PathBuf> {
        self.config.schema.path.as_deref().map(|p| self.resolve(p))
    }

    /// Output path resolved against the config's directory.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.config.generate.output.as_deref().map(|p| self.resolve(p))
    }

    fn resolve(&self, relative: &Path) -> PathBuf {
        match self.path.parent() {
            Some(dir) if relative.is_relative() => dir.join(relative),
            _ => relative.to_path_buf(),
        }
    }
}
