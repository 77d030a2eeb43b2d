use unicode_normalization::UnicodeNormalization;

/// Normalize raw recognizer output before it enters the domain: NFKC,
/// control characters dropped, whitespace runs collapsed to single spaces.
pub fn sanitize_transcript(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();

    let mut result = String::with_capacity(normalized.len());
    let mut prev_was_space = true;

    for ch in normalized.chars() {
        if ch.is_control() && !ch.is_whitespace() {
            continue;
        }
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }

    result.trim_end().to_string()
}
