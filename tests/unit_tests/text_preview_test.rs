use lectern::infrastructure::observability::preview;

#[test]
fn given_short_text_when_previewing_then_is_unchanged() {
    assert_eq!(preview("a short line"), "a short line");
}

#[test]
fn given_long_text_when_previewing_then_truncates_and_reports_length() {
    let text = "x".repeat(250);

    let shortened = preview(&text);

    assert!(shortened.starts_with(&"x".repeat(100)));
    assert!(shortened.ends_with("(250 chars total)"));
}

#[test]
fn given_blank_text_when_previewing_then_returns_marker() {
    assert_eq!(preview("   "), "[EMPTY]");
}
