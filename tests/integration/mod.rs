// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Small prefix file covering both classifications
pub const SAMPLE_PREFIXES: &str = "\
# Sample non-breaking prefixes
Dr
Prof   # professor
Sn

No #NUMERIC_ONLY#
s #NUMERIC_ONLY# sayfa
";

/// Test fixture helper for creating temporary prefix and config files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Write a file with given content below the fixture root
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &[u8]) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        // Create parent directories if needed
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write a prefix file with given content
    pub fn create_prefix_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        self.create_file(relative_path, content.as_bytes())
    }
}

/// Install a test-writer subscriber so `tracing` output shows up with `--nocapture`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Compare two sentence lists entry by entry, providing detailed diff on mismatch
pub fn assert_sentences(actual: &[String], expected: &[&str], context: &str) {
    if actual.len() != expected.len() {
        panic!(
            "{}: Sentence count mismatch. Expected {} sentences, got {}\nExpected: {:?}\nActual:   {:?}",
            context,
            expected.len(),
            actual.len(),
            expected,
            actual
        );
    }

    for (i, (actual_sentence, expected_sentence)) in actual.iter().zip(expected.iter()).enumerate() {
        if actual_sentence != expected_sentence {
            panic!(
                "{}: Sentence {} mismatch\nExpected: {}\nActual:   {}",
                context,
                i + 1,
                expected_sentence,
                actual_sentence
            );
        }
    }
}
