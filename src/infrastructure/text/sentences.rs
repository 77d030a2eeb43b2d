use std::sync::LazyLock;

use regex::Regex;

static SENTENCE_TERMINAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Split text on sentence-terminal punctuation, trimming each fragment and
/// dropping empties. Text with no terminal punctuation comes back as one
/// fragment.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_TERMINAL
        .split(text)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Truncate to at most `max_chars` characters on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
