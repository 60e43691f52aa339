use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FormatError;

/// Which escaping convention governs how a key is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
    /// JSON string-literal escaping without the surrounding quotes.
    Repr,
    /// fish shell `bind` syntax.
    #[default]
    Fish,
    /// GNU readline `inputrc` syntax, wrapped in double quotes.
    Readline,
}

impl EscapeMode {
    pub const ALL: [EscapeMode; 3] = [EscapeMode::Repr, EscapeMode::Fish, EscapeMode::Readline];

    pub fn as_str(self) -> &'static str {
        match self {
            EscapeMode::Repr => "repr",
            EscapeMode::Fish => "fish",
            EscapeMode::Readline => "readline",
        }
    }

    /// Whether rendered output is wrapped in double quotes.
    pub fn is_quoted(self) -> bool {
        matches!(self, EscapeMode::Readline)
    }
}

impl fmt::Display for EscapeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EscapeMode {
    type Err = FormatError;

    /// Parses a mode name case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "repr" => Ok(EscapeMode::Repr),
            "fish" => Ok(EscapeMode::Fish),
            "readline" => Ok(EscapeMode::Readline),
            _ => {
                tracing::debug!("rejecting escape mode {s:?}");
                Err(FormatError::UnknownMode(s.to_string()))
            }
        }
    }
}
