// WHY: Main sentence tokenizer interface orchestrating the boundary passes
// raw text -> candidate scan -> prefix suppression -> normalization

use std::fmt;
use std::path::Path;
use tracing::{debug, info};

use crate::config::{Mode, TokenizerConfig};
use crate::error::TokenizerError;

pub mod normalization;
pub mod prefixes;
pub mod scanner;
pub mod suppression;

pub use normalization::split_sentences;
pub use prefixes::{NonBreakingPrefixTable, PrefixClassification, PrefixSource};
pub use scanner::BoundaryCandidateScanner;
pub use suppression::{Decision, PrefixSuppressionPass};

/// Break marker injected into the working buffer
/// WHY: all input whitespace is flattened to spaces first, so a newline can only be a marker
pub(crate) const MARKER: char = '\n';

/// Rule-based Turkish sentence tokenizer
///
/// Immutable after construction; share one instance across threads by reference
/// or through an `Arc`.
#[derive(Debug)]
pub struct SentenceTokenizer {
    table: NonBreakingPrefixTable,
    scanner: BoundaryCandidateScanner,
    suppression: PrefixSuppressionPass,
    default_mode: Mode,
}

impl SentenceTokenizer {
    /// Create a tokenizer from an optional prefix file; the bundled Turkish
    /// table is used when `prefix_file` is `None`
    pub fn new(prefix_file: Option<&Path>) -> Result<Self, TokenizerError> {
        let table = match prefix_file {
            Some(path) => NonBreakingPrefixTable::load(path)?,
            None => NonBreakingPrefixTable::bundled(),
        };
        Self::with_table(table)
    }

    /// Create a tokenizer with default settings and the bundled table
    pub fn with_default_table() -> Result<Self, TokenizerError> {
        Self::new(None)
    }

    pub fn with_config(config: &TokenizerConfig) -> Result<Self, TokenizerError> {
        let mut tokenizer = Self::new(config.prefix_file.as_deref())?;
        tokenizer.default_mode = config.default_mode;
        Ok(tokenizer)
    }

    /// Create a tokenizer around an already built prefix table
    pub fn with_table(table: NonBreakingPrefixTable) -> Result<Self, TokenizerError> {
        let scanner = BoundaryCandidateScanner::new()?;
        let suppression = PrefixSuppressionPass::new()?;

        info!(
            prefixes = table.len(),
            source = %table.source(),
            "Sentence tokenizer ready"
        );

        Ok(Self {
            table,
            scanner,
            suppression,
            default_mode: Mode::default(),
        })
    }

    /// Split `text` into sentences
    ///
    /// `None` or empty text yields no sentences. `Mode::Table` and
    /// `Mode::OnlyIndex` split on existing newlines only; an unset mode runs the
    /// full heuristic pipeline.
    pub fn tokenize(&self, text: Option<&str>, mode: Option<Mode>) -> Vec<String> {
        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => return Vec::new(),
        };
        let mode = mode.unwrap_or_default();

        let sentences = if mode.is_passthrough() {
            text.split('\n').map(str::to_string).collect()
        } else {
            let scanned = self.scanner.scan(text);
            let resolved = self.suppression.apply(&scanned, &self.table);
            split_sentences(&resolved)
        };

        debug!(
            %mode,
            bytes = text.len(),
            sentences = sentences.len(),
            "Tokenized text"
        );
        sentences
    }

    /// Split `text` using the configured default mode
    pub fn split(&self, text: &str) -> Vec<String> {
        self.tokenize(Some(text), Some(self.default_mode))
    }

    pub fn prefix_table(&self) -> &NonBreakingPrefixTable {
        &self.table
    }

    /// Path of the prefix file in use, `None` for the bundled table
    pub fn prefix_file(&self) -> Option<&Path> {
        match self.table.source() {
            PrefixSource::File(path) => Some(path.as_path()),
            PrefixSource::Bundled => None,
        }
    }

    pub fn default_mode(&self) -> Mode {
        self.default_mode
    }
}

impl fmt::Display for SentenceTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix_file() {
            Some(path) => write!(
                f,
                "Sentence tokenizer integrated with \"{}\" look-up table",
                path.display()
            ),
            None => f.write_str("Sentence tokenizer integrated with bundled Turkish look-up table"),
        }
    }
}
