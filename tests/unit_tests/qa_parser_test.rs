use lectern::infrastructure::generation::parse_qa_pairs;

#[test]
fn given_plain_qa_lines_when_parsing_then_returns_pairs() {
    let text = "Q: What produces ATP?\nA: The mitochondria.\nQ: What do cells need?\nA: Energy.";

    let pairs = parse_qa_pairs(text, 4);

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0, "What produces ATP?");
    assert_eq!(pairs[0].1, "The mitochondria.");
}

#[test]
fn given_numbered_labels_when_parsing_then_still_matches() {
    let text = "Q1: First question?\nA1: First answer.\nQ2: Second question?\nA2: Second answer.";

    let pairs = parse_qa_pairs(text, 4);

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[1].0, "Second question?");
}

#[test]
fn given_bulleted_lines_when_parsing_then_strips_markers() {
    let text = "- Q: Bulleted question?\n- A: Bulleted answer.";

    let pairs = parse_qa_pairs(text, 4);

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0, "Bulleted question?");
}

#[test]
fn given_more_pairs_than_cap_when_parsing_then_truncates() {
    let mut text = String::new();
    for i in 0..10 {
        text.push_str(&format!("Q: Question {}?\nA: Answer {}.\n", i, i));
    }

    let pairs = parse_qa_pairs(&text, 4);

    assert_eq!(pairs.len(), 4);
}

#[test]
fn given_dangling_question_when_parsing_then_it_is_dropped() {
    let text = "Q: Complete pair?\nA: Yes.\nQ: No answer follows this one?";

    let pairs = parse_qa_pairs(text, 4);

    assert_eq!(pairs.len(), 1);
}

#[test]
fn given_prose_without_labels_when_parsing_then_returns_empty() {
    assert!(parse_qa_pairs("Just a paragraph of prose.", 4).is_empty());
}
