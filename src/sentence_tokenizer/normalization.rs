// WHY: Final pass turning the marker-annotated buffer into clean sentence strings
// Spaces are only ever cosmetic here; markers alone decide where sentences end

use super::MARKER;

/// Split a resolved buffer into sentences
pub fn split_sentences(buffer: &str) -> Vec<String> {
    let mut collapsed = String::with_capacity(buffer.len());
    collapse_into(buffer, &mut collapsed);
    collapsed
        .trim()
        .split(MARKER)
        .map(str::to_string)
        .collect()
}

/// Collapse space runs to one space and drop spaces touching a marker
///
/// `out` is cleared before writing.
pub fn collapse_into(buffer: &str, out: &mut String) {
    out.clear();
    out.reserve(buffer.len());

    let mut pending_space = false;
    for ch in buffer.chars() {
        match ch {
            ' ' => pending_space = true,
            MARKER => {
                // Space before a marker is dropped
                pending_space = false;
                out.push(MARKER);
            }
            _ => {
                if pending_space && !out.is_empty() && !out.ends_with(MARKER) {
                    out.push(' ');
                }
                pending_space = false;
                out.push(ch);
            }
        }
    }
}
