// WHY: One error type for construction-time failures; tokenizing itself never fails

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a tokenizer
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// The configured non-breaking prefix file does not exist or is not a regular file
    #[error("non-breaking prefix file not found: {}", .path.display())]
    PrefixFileNotFound {
        /// Path that failed to resolve
        path: PathBuf,
    },

    /// The prefix file exists but could not be read as UTF-8 text
    #[error("non-breaking prefix file could not be read: {}", .path.display())]
    PrefixFileUnreadable {
        /// Path of the unreadable file
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A built-in pattern failed to compile
    #[error("failed to compile tokenizer pattern: {0}")]
    Pattern(#[from] regex_automata::meta::BuildError),

    /// Tokenizer configuration could not be parsed
    #[error("invalid tokenizer configuration: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_file_not_found_display() {
        let error = TokenizerError::PrefixFileNotFound {
            path: PathBuf::from("/missing/tr_non_suffixes"),
        };
        assert_eq!(
            error.to_string(),
            "non-breaking prefix file not found: /missing/tr_non_suffixes"
        );
    }

    #[test]
    fn test_unreadable_keeps_io_source() {
        use std::error::Error as _;

        let error = TokenizerError::PrefixFileUnreadable {
            path: PathBuf::from("prefixes.txt"),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("prefixes.txt"));
    }
}
