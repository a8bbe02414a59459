// WHY: Plain config structs passed to constructors, loadable from JSON

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::TokenizerError;

/// How `tokenize` decides sentence boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Full heuristic pipeline: candidate scan, prefix suppression, normalization
    #[default]
    Heuristic,
    /// Existing newlines are the only boundaries
    Table,
    /// Alias of `Table`
    OnlyIndex,
}

impl Mode {
    /// Map a mode name onto a mode. Unknown names fall back to the heuristic pipeline.
    pub fn from_name(name: &str) -> Self {
        match name {
            "table" => Mode::Table,
            "only_index" => Mode::OnlyIndex,
            _ => Mode::Heuristic,
        }
    }

    /// True for the modes that split solely on newline characters
    pub fn is_passthrough(self) -> bool {
        matches!(self, Mode::Table | Mode::OnlyIndex)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Heuristic => "heuristic",
            Mode::Table => "table",
            Mode::OnlyIndex => "only_index",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construction-time settings for a sentence tokenizer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Non-breaking prefix file; the bundled Turkish table is used when unset
    pub prefix_file: Option<PathBuf>,
    /// Mode used by `SentenceTokenizer::split`
    pub default_mode: Mode,
}

impl TokenizerConfig {
    /// Parse a JSON document such as `{"prefix_file": "tr.txt", "default_mode": "table"}`
    pub fn from_json(json: &str) -> Result<Self, TokenizerError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tokenizer config {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to parse tokenizer config {}", path.display()))
    }
}
