//! Normalization of raw article extracts into the corpus character set.

/// Characters that survive cleaning: the Devanagari block (which already
/// covers the danda and Devanagari digits), whitespace, and a small set of
/// punctuation marks.
fn is_allowed(c: char) -> bool {
    matches!(c, '\u{0900}'..='\u{097F}') || c.is_whitespace() || matches!(c, ',' | '!' | '?')
}

/// Normalizes raw article text.
///
/// Runs of disallowed characters collapse to a single space, whitespace runs
/// collapse to a single space, and the result is trimmed. Total over all
/// input; cleaning already-clean text is a no-op.
pub fn clean_text(raw: &str) -> String {
    let mut replaced = String::with_capacity(raw.len());
    let mut gap = false;
    for c in raw.chars() {
        if is_allowed(c) {
            replaced.push(c);
            gap = false;
        } else if !gap {
            replaced.push(' ');
            gap = true;
        }
    }
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of whitespace-separated words in cleaned text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
