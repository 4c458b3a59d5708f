use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Keyword that opens a generated definition block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    /// `type Foo_ImportedType { ... }`
    #[default]
    Type,
    /// `input Foo_ImportedType { ... }`
    Input,
}

impl Keyword {
    /// Get the keyword as it appears in generated text
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Type => "type",
            Keyword::Input => "input",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" => Ok(Keyword::Type),
            "input" => Ok(Keyword::Input),
            other => Err(format!(
                "unknown keyword '{}', expected 'type' or 'input'",
                other
            )),
        }
    }
}
