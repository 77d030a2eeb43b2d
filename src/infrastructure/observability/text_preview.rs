const MAX_VISIBLE_CHARS: usize = 100;

/// Shorten transcript or feedback text for log lines.
pub fn preview(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total <= MAX_VISIBLE_CHARS {
        return trimmed.to_string();
    }

    let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
    format!("{}... ({} chars total)", visible, total)
}
