// WHY: Word-level splitter applied to an already segmented sentence
// One case-insensitive alternation; earlier alternatives win at the same position

use regex_automata::meta::Regex;
use regex_automata::util::syntax;
use tracing::debug;

use crate::error::TokenizerError;

// İ is listed explicitly: it has no simple case folding to i
/// Word of three or more letters with an apostrophe-joined suffix ("Ankara'ya")
const SUFFIXED_WORD: &str = r"[a-zğçşöüıİ]{3,}' ?[a-zğçşöüıİ]+";

/// Percent-prefixed number with separators ("%12,5")
const PERCENT_NUMBER: &str = r"%\d{2,}[.,:/\d-]+";

/// Letters, digits and a fixed set of symbols
const ANY_WORD: &str = r"[a-zğçşöüıİ_+%.()@&`’/\\\d-]+";

/// Punctuation attached to an optional letter run
const TRAILING_PUNCTUATION: &str = r"[a-zğçşöüıİ]*[,!?;:]";

/// Splits a sentence into word and punctuation tokens
#[derive(Debug)]
pub struct WordTokenizer {
    pattern: Regex,
}

impl WordTokenizer {
    pub fn new() -> Result<Self, TokenizerError> {
        let alternation = [SUFFIXED_WORD, PERCENT_NUMBER, ANY_WORD, TRAILING_PUNCTUATION].join("|");
        let pattern = Regex::builder()
            .syntax(syntax::Config::new().case_insensitive(true))
            .build(&alternation)?;
        Ok(Self { pattern })
    }

    /// Tokenize one sentence; `None` yields no tokens
    ///
    /// A period run closing the last token becomes a token of its own.
    pub fn tokenize(&self, sentence: Option<&str>) -> Vec<String> {
        let Some(sentence) = sentence else {
            return Vec::new();
        };

        let mut words: Vec<String> = self
            .pattern
            .find_iter(sentence)
            .map(|found| sentence[found.range()].to_string())
            .collect();

        if let Some(last) = words.pop() {
            match split_final_periods(&last) {
                Some((word, periods)) => {
                    words.push(word.to_string());
                    words.push(periods.to_string());
                }
                None => words.push(last),
            }
        }

        debug!(bytes = sentence.len(), tokens = words.len(), "Tokenized sentence");
        words
    }
}

/// Split `word` into `(stem, periods)` when it ends in periods preceded by a word character
fn split_final_periods(word: &str) -> Option<(&str, &str)> {
    let stem = word.trim_end_matches('.');
    if stem.len() == word.len() {
        return None;
    }
    let is_word_char = |ch: char| ch.is_alphanumeric() || ch == '_';
    match stem.chars().next_back() {
        Some(ch) if is_word_char(ch) => Some((stem, &word[stem.len()..])),
        _ => None,
    }
}
