use lectern::infrastructure::text::{split_sentences, truncate_chars};

#[test]
fn given_terminal_punctuation_when_splitting_then_returns_trimmed_fragments() {
    assert_eq!(
        split_sentences("One here. Two there! Three anywhere?"),
        vec!["One here", "Two there", "Three anywhere"]
    );
}

#[test]
fn given_no_punctuation_when_splitting_then_returns_single_fragment() {
    assert_eq!(
        split_sentences("one giant unpunctuated sentence"),
        vec!["one giant unpunctuated sentence"]
    );
}

#[test]
fn given_repeated_punctuation_when_splitting_then_produces_no_empty_fragments() {
    assert_eq!(split_sentences("Wait... what?!"), vec!["Wait", "what"]);
    assert!(split_sentences("...!?.").is_empty());
}

#[test]
fn given_multibyte_text_when_truncating_then_respects_char_boundaries() {
    assert_eq!(truncate_chars("héllo", 2), "hé");
    assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
}

#[test]
fn given_short_text_when_truncating_then_is_unchanged() {
    assert_eq!(truncate_chars("ab", 10), "ab");
}
