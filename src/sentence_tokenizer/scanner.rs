// WHY: Coarse first pass proposing sentence breaks before prefix suppression
// Each rule inserts a marker between terminal punctuation and a probable sentence starter

use regex_automata::meta::Regex;
use tracing::trace;

use super::MARKER;
use crate::error::TokenizerError;

/// `?`/`!` followed by an upper case or caseless letter, optionally behind opening quotes
const QUESTION_EXCLAMATION: &str = r#"([?!]) *(['"(\[¿¡\p{Pi}]*[\p{Lu}\p{Lo}])"#;

/// Ellipsis followed by a sentence starter
const MULTI_PERIOD: &str = r#"(\.\.+) *(['"(\[¿¡\p{Pi}]*[\p{Lu}\p{Lo}])"#;

/// Sentence ending inside a quotation or parenthetical, then whitespace and a starter
const CLOSED_QUOTATION: &str =
    r#"([?!.] *['")\]\p{Pf}]+) +(['"(\[¿¡\p{Pi}]* *[\p{Lu}\p{Lo}])"#;

/// Terminal punctuation, whitespace, then an opening quote before a starter
const OPENING_QUOTATION: &str = r#"([?!.]) +(['"\[¿¡\p{Pi}]+ *[\p{Lu}\p{Lo}])"#;

/// Rules in application order
pub const CANDIDATE_RULES: [&str; 4] = [
    QUESTION_EXCLAMATION,
    MULTI_PERIOD,
    CLOSED_QUOTATION,
    OPENING_QUOTATION,
];

/// Inserts candidate break markers using four ordered Unicode-aware patterns
#[derive(Debug)]
pub struct BoundaryCandidateScanner {
    rules: Vec<Regex>,
}

impl BoundaryCandidateScanner {
    pub fn new() -> Result<Self, TokenizerError> {
        let rules = CANDIDATE_RULES
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Flatten whitespace, then apply every rule cumulatively
    ///
    /// The returned buffer contains `MARKER` only where a rule proposed a break.
    pub fn scan(&self, text: &str) -> String {
        let mut buffer = flatten_whitespace(text);
        for (index, rule) in self.rules.iter().enumerate() {
            buffer = insert_markers(rule, &buffer);
            trace!(rule = index + 1, "Applied candidate boundary rule");
        }
        buffer
    }
}

/// Replace every whitespace character with a plain space
/// WHY: original line breaks must not be confused with injected markers
pub fn flatten_whitespace(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_whitespace() { ' ' } else { ch })
        .collect()
}

/// Rewrite each match as `group1 MARKER group2`, dropping whatever lay between the groups
fn insert_markers(rule: &Regex, text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 8);
    let mut last_end = 0;

    for caps in rule.captures_iter(text) {
        let (Some(head), Some(tail)) = (caps.get_group(1), caps.get_group(2)) else {
            continue;
        };
        result.push_str(&text[last_end..head.start]);
        result.push_str(&text[head.range()]);
        result.push(MARKER);
        result.push_str(&text[tail.range()]);
        last_end = tail.end;
    }

    result.push_str(&text[last_end..]);
    result
}
