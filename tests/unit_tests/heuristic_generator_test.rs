use lectern::infrastructure::generation::{
    FlashcardStyle, TOO_SHORT_NOTES, compose_flashcards, compose_quiz, extract_notes,
};

const LECTURE: &str = "The mitochondria is the powerhouse of the cell. \
     It produces ATP through respiration. This process is essential for life. \
     Cells need energy.";

#[test]
fn given_input_under_30_chars_when_extracting_then_returns_sentinel() {
    assert_eq!(extract_notes("Hello."), TOO_SHORT_NOTES);
    assert_eq!(extract_notes(""), TOO_SHORT_NOTES);
}

#[test]
fn given_lecture_transcript_when_extracting_then_keeps_three_longest_sentences() {
    let notes = extract_notes(LECTURE);

    assert_eq!(
        notes,
        "The mitochondria is the powerhouse of the cell. \
         It produces ATP through respiration. This process is essential for life."
    );
}

#[test]
fn given_lecture_transcript_when_extracting_then_drops_short_fragments() {
    let notes = extract_notes(LECTURE);

    // "Cells need energy" is under the 20-char threshold
    assert!(!notes.contains("Cells need energy"));
}

#[test]
fn given_very_long_sentence_when_extracting_then_truncates_with_ellipsis() {
    let long_sentence = "word ".repeat(100);
    let notes = extract_notes(&long_sentence);

    assert!(notes.ends_with("..."));
    assert_eq!(notes.chars().count(), 303);
}

#[test]
fn given_text_without_punctuation_when_extracting_then_treats_it_as_one_sentence() {
    let text = "this transcript has no punctuation at all";
    let notes = extract_notes(text);

    assert_eq!(notes, format!("{}.", text));
}

#[test]
fn given_identical_input_when_extracting_twice_then_output_is_identical() {
    assert_eq!(extract_notes(LECTURE), extract_notes(LECTURE));
}

#[test]
fn given_six_fragments_when_composing_quiz_then_caps_at_four() {
    let notes = "Sentence number one is here. Sentence number two is here. \
         Sentence number three is here. Sentence number four is here. \
         Sentence number five is here. Sentence number six is here.";

    let quiz = compose_quiz(notes);

    assert_eq!(quiz.len(), 4);
}

#[test]
fn given_two_fragments_when_composing_quiz_then_returns_two_items() {
    let notes = "Mitochondria produce most cellular energy. Ribosomes assemble proteins.";

    let quiz = compose_quiz(notes);

    assert_eq!(quiz.len(), 2);
    assert!(quiz[0].question.starts_with("What is the key idea in: '"));
    assert!(quiz[0].question.ends_with("'?"));
    assert!(quiz[0].answer.starts_with("Mitochondria produce"));
}

#[test]
fn given_no_qualifying_fragments_when_composing_quiz_then_returns_empty() {
    assert!(compose_quiz("Short. Tiny. Small.").is_empty());
}

#[test]
fn given_long_fragment_when_composing_quiz_then_excerpt_is_bounded() {
    let notes = format!("{}.", "energy ".repeat(40).trim_end());

    let quiz = compose_quiz(&notes);

    assert_eq!(quiz.len(), 1);
    // template + 70-char excerpt
    assert!(quiz[0].question.chars().count() <= 70 + 30);
    assert!(quiz[0].answer.chars().count() <= 150);
}

#[test]
fn given_one_word_style_when_composing_flashcards_then_backs_are_single_uppercase_tokens() {
    let notes = "The mitochondria is the powerhouse of the cell. \
         It produces ATP through cellular respiration. \
         This biological process is essential for life.";

    let cards = compose_flashcards(notes, FlashcardStyle::OneWord);

    assert!(!cards.is_empty());
    for card in &cards {
        assert!(!card.back.contains(char::is_whitespace));
        assert_eq!(card.back, card.back.to_uppercase());
    }
}

#[test]
fn given_one_word_style_when_composing_then_picks_first_long_word_after_front() {
    let cards = compose_flashcards(
        "The mitochondria is the powerhouse of the cell.",
        FlashcardStyle::OneWord,
    );

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].front, "The mitochondria is …");
    // "the" is too short; "powerhouse" is the first word over four chars
    assert_eq!(cards[0].back, "POWERHOUSE");
}

#[test]
fn given_three_word_fragment_when_composing_one_word_then_falls_back_to_last_word() {
    let cards = compose_flashcards("Photosynthesis stores energy!!", FlashcardStyle::OneWord);

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].back, "ENERGY");
}

#[test]
fn given_phrase_style_when_composing_then_back_continues_the_sentence() {
    let cards = compose_flashcards(
        "The Krebs cycle produces energy carriers inside the matrix.",
        FlashcardStyle::Phrase,
    );

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].front, "The Krebs cycle …");
    assert_eq!(cards[0].back, "produces energy carriers inside the matrix");
}

#[test]
fn given_many_fragments_when_composing_flashcards_then_caps_at_six() {
    let notes = "Sentence number one is here. Sentence number two is here. \
         Sentence number three is here. Sentence number four is here. \
         Sentence number five is here. Sentence number six is here. \
         Sentence number seven is here. Sentence number eight is here.";

    let cards = compose_flashcards(notes, FlashcardStyle::OneWord);

    assert_eq!(cards.len(), 6);
}

#[test]
fn given_identical_notes_when_composing_twice_then_output_is_identical() {
    let notes = extract_notes(LECTURE);

    assert_eq!(compose_quiz(&notes), compose_quiz(&notes));
    assert_eq!(
        compose_flashcards(&notes, FlashcardStyle::OneWord),
        compose_flashcards(&notes, FlashcardStyle::OneWord)
    );
}
