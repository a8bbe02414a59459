// WHY: Second pass deciding, token by token, whether a period really ends a sentence
// Single forward scan with exactly one token of lookahead

use regex_automata::meta::Regex;
use tracing::trace;

use super::prefixes::NonBreakingPrefixTable;
use super::MARKER;
use crate::error::TokenizerError;

/// `(prefix)(closing punctuation)(periods)` at the end of a token
const TRAILING_PERIODS: &str = r#"([\w.\-]*)(['")\]%\p{Pf}]*)(\.+)$"#;

/// Dotted upper case acronym such as "T.B.M.M."
const ACRONYM: &str = r"(\.)[\p{Lu}\p{Lo}\-]+(\.+)$";

/// Optional opening quotes, then an upper case letter, caseless letter or digit
const SENTENCE_STARTER: &str = r#"^ *['"(\[¿¡\p{Pi}]* *[\p{Lu}\p{Lo}0-9]"#;

/// Outcome for a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Token does not end in a period; any candidate marker inside it stands
    NoTrailingPeriod,
    /// Known `Default` prefix with no closing punctuation before the period
    Honorific,
    /// Dotted upper case acronym
    Acronym,
    /// `NumericOnly` prefix followed by a number
    NumericException,
    /// Look-ahead word cannot start a sentence
    NoStarter,
    /// Break after the whole token
    Break,
}

impl Decision {
    pub fn is_break(self) -> bool {
        matches!(self, Decision::Break)
    }
}

/// Removes or confirms candidate breaks using the non-breaking prefix table
#[derive(Debug)]
pub struct PrefixSuppressionPass {
    trailing_periods: Regex,
    acronym: Regex,
    sentence_starter: Regex,
}

impl PrefixSuppressionPass {
    pub fn new() -> Result<Self, TokenizerError> {
        Ok(Self {
            trailing_periods: Regex::new(TRAILING_PERIODS)?,
            acronym: Regex::new(ACRONYM)?,
            sentence_starter: Regex::new(SENTENCE_STARTER)?,
        })
    }

    /// Resolve every period in a marker-annotated buffer
    ///
    /// Tokens are split on spaces; markers stay embedded in the tokens they were
    /// inserted into. The output re-joins tokens with single spaces.
    pub fn apply(&self, buffer: &str, table: &NonBreakingPrefixTable) -> String {
        let tokens: Vec<&str> = buffer.split(' ').filter(|token| !token.is_empty()).collect();
        let Some((last, leading)) = tokens.split_last() else {
            return String::new();
        };

        let mut result = String::with_capacity(buffer.len() + 16);
        for (index, token) in leading.iter().enumerate() {
            let next = tokens[index + 1];
            let decision = self.decide(token, next, table);
            trace!(token, next, ?decision, "Resolved period");

            result.push_str(token);
            if decision.is_break() {
                result.push(MARKER);
            }
            result.push(' ');
        }

        // The last token has nothing to look ahead to
        result.push_str(last);
        result
    }

    /// Decide whether `token` ends a sentence, given the following token
    pub fn decide(&self, token: &str, next: &str, table: &NonBreakingPrefixTable) -> Decision {
        let mut caps = self.trailing_periods.create_captures();
        self.trailing_periods.captures(token, &mut caps);
        let (Some(prefix), Some(closing)) = (caps.get_group(1), caps.get_group(2)) else {
            return Decision::NoTrailingPeriod;
        };
        let prefix = &token[prefix.range()];
        let closing = &token[closing.range()];

        // Anchored on trailing periods: nothing follows the last period, so the
        // look-ahead word is always the next token
        if is_honorific(table, prefix, closing) {
            Decision::Honorific
        } else if self.acronym.is_match(token) {
            Decision::Acronym
        } else if !self.sentence_starter.is_match(next) {
            Decision::NoStarter
        } else if is_numeric_exception(table, prefix, closing, next) {
            Decision::NumericException
        } else {
            Decision::Break
        }
    }
}

/// `prefix` is a `Default` entry and no closing punctuation follows it
pub fn is_honorific(table: &NonBreakingPrefixTable, prefix: &str, closing: &str) -> bool {
    !prefix.is_empty() && closing.is_empty() && table.is_default(prefix)
}

/// `prefix` is a `NumericOnly` entry, no closing punctuation follows it and the
/// next word starts with a decimal digit
pub fn is_numeric_exception(
    table: &NonBreakingPrefixTable,
    prefix: &str,
    closing: &str,
    next_word: &str,
) -> bool {
    !prefix.is_empty()
        && closing.is_empty()
        && table.is_numeric_only(prefix)
        && next_word.starts_with(|ch: char| ch.is_ascii_digit())
}
