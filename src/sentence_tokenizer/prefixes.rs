// WHY: Centralized non-breaking prefix lookup for sentence boundary suppression
// Loaded once per tokenizer, read-only afterwards

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::TokenizerError;

/// Turkish prefix table compiled into the crate
pub const BUNDLED_TURKISH_PREFIXES: &str = include_str!("../../data/tr_non_suffixes");

/// Marker tagging a prefix line as numeric-only
pub const NUMERIC_ONLY_MARKER: &str = "#NUMERIC_ONLY#";

/// Highest synthetic numeric prefix; "1" through this value are always registered
pub const MAX_SYNTHETIC_NUMBER: u32 = 9999;

/// How a known prefix affects a following period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixClassification {
    /// Never ends a sentence unless closing punctuation follows the prefix
    Default,
    /// Only non-breaking when the next word starts with a number
    NumericOnly,
}

/// Where a prefix table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixSource {
    Bundled,
    File(PathBuf),
}

impl fmt::Display for PrefixSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixSource::Bundled => f.write_str("bundled Turkish table"),
            PrefixSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Dictionary of non-breaking prefixes (abbreviations, honorifics, numbers)
#[derive(Debug, Clone)]
pub struct NonBreakingPrefixTable {
    prefixes: HashMap<String, PrefixClassification>,
    source: PrefixSource,
}

impl NonBreakingPrefixTable {
    /// Load a prefix file from disk
    ///
    /// Fails with `PrefixFileNotFound` if `path` is not an existing regular file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TokenizerError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(TokenizerError::PrefixFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path).map_err(|source| {
            TokenizerError::PrefixFileUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let table = Self::parse(&contents, PrefixSource::File(path.to_path_buf()));
        info!(
            "Loaded {} non-breaking prefixes from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Table built from the Turkish prefix list shipped with the crate
    pub fn bundled() -> Self {
        let table = Self::parse(BUNDLED_TURKISH_PREFIXES, PrefixSource::Bundled);
        debug!("Loaded {} bundled non-breaking prefixes", table.len());
        table
    }

    /// Parse prefix file contents, then register the synthetic numeric prefixes
    pub fn parse(contents: &str, source: PrefixSource) -> Self {
        let mut prefixes = HashMap::new();

        for line in contents.lines() {
            if let Some((prefix, classification)) = parse_line(line) {
                prefixes.insert(prefix.to_string(), classification);
            }
        }

        // WHY: list numbering such as "Madde 5." must not end a sentence
        for number in 1..=MAX_SYNTHETIC_NUMBER {
            prefixes.insert(number.to_string(), PrefixClassification::Default);
        }

        Self { prefixes, source }
    }

    pub fn lookup(&self, prefix: &str) -> Option<PrefixClassification> {
        self.prefixes.get(prefix).copied()
    }

    pub fn is_default(&self, prefix: &str) -> bool {
        self.lookup(prefix) == Some(PrefixClassification::Default)
    }

    pub fn is_numeric_only(&self, prefix: &str) -> bool {
        self.lookup(prefix) == Some(PrefixClassification::NumericOnly)
    }

    /// All registered prefixes with their classification, in no particular order
    pub fn entries(&self) -> impl Iterator<Item = (&str, PrefixClassification)> + '_ {
        self.prefixes
            .iter()
            .map(|(prefix, classification)| (prefix.as_str(), *classification))
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn source(&self) -> &PrefixSource {
        &self.source
    }
}

/// Classify one prefix file line; `None` for blank and comment-only lines
fn parse_line(line: &str) -> Option<(&str, PrefixClassification)> {
    let classification = if line.contains(NUMERIC_ONLY_MARKER) {
        PrefixClassification::NumericOnly
    } else {
        PrefixClassification::Default
    };

    let without_comment = match line.find('#') {
        Some(index) => &line[..index],
        None => line,
    };

    let prefix = without_comment.trim();
    if prefix.is_empty() {
        None
    } else {
        Some((prefix, classification))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_from(contents: &str) -> NonBreakingPrefixTable {
        NonBreakingPrefixTable::parse(contents, PrefixSource::Bundled)
    }

    #[test]
    fn test_parse_line_classification() {
        assert_eq!(parse_line("Dr"), Some(("Dr", PrefixClassification::Default)));
        assert_eq!(
            parse_line("No #NUMERIC_ONLY#"),
            Some(("No", PrefixClassification::NumericOnly))
        );
        assert_eq!(
            parse_line("  Prof   # professor"),
            Some(("Prof", PrefixClassification::Default))
        );
        assert_eq!(parse_line("# just a comment"), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("#NUMERIC_ONLY#"), None);
    }

    #[test]
    fn test_synthetic_numbers_always_default() {
        let table = table_from("");
        assert_eq!(table.len(), MAX_SYNTHETIC_NUMBER as usize);
        assert!(table.is_default("1"));
        assert!(table.is_default("5"));
        assert!(table.is_default("9999"));
        assert_eq!(table.lookup("0"), None);
        assert_eq!(table.lookup("10000"), None);

        // A numeric-only file entry is overridden by the synthetic entry
        let table = table_from("12 #NUMERIC_ONLY#\n");
        assert!(table.is_default("12"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = table_from("Dr\nNo #NUMERIC_ONLY#\n");
        assert!(table.is_default("Dr"));
        assert_eq!(table.lookup("dr"), None);
        assert!(table.is_numeric_only("No"));
        assert!(!table.is_default("No"));
    }

    #[test]
    fn test_bundled_table_contents() {
        let table = NonBreakingPrefixTable::bundled();
        assert_eq!(table.source(), &PrefixSource::Bundled);
        assert!(table.is_default("Dr"));
        assert!(table.is_default("Prof"));
        assert!(table.is_default("Doç"));
        assert!(table.is_numeric_only("No"));
        assert!(table.len() > MAX_SYNTHETIC_NUMBER as usize);
        assert_eq!(table.entries().count(), table.len());
    }

    #[test]
    fn test_load_missing_file() {
        let result = NonBreakingPrefixTable::load("/no/such/prefix/file");
        assert!(matches!(
            result,
            Err(TokenizerError::PrefixFileNotFound { .. })
        ));
    }
}
