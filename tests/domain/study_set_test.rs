use lectern::domain::{
    AudioFormat, Flashcard, Lecture, QuizItem, StudySet, Transcript,
};

fn sample_study_set() -> StudySet {
    let lecture = Lecture::new("lecture.wav".to_string(), AudioFormat::Wav, 1024);
    StudySet::new(
        lecture,
        Transcript::Recognized("A transcript long enough to matter.".to_string()),
    )
}

#[test]
fn given_new_study_set_when_created_then_derived_values_are_absent() {
    let study_set = sample_study_set();

    assert!(study_set.notes.is_none());
    assert!(study_set.quiz.is_none());
    assert!(study_set.flashcards.is_none());
}

#[test]
fn given_quiz_and_flashcards_when_setting_new_notes_then_both_are_invalidated() {
    let mut study_set = sample_study_set();
    study_set.set_notes("Old notes.".to_string());
    study_set.set_quiz(vec![QuizItem::new("Q?".to_string(), "A.".to_string())]);
    study_set.set_flashcards(vec![Flashcard::new("F".to_string(), "B".to_string())]);

    study_set.set_notes("New notes.".to_string());

    assert_eq!(study_set.notes.as_deref(), Some("New notes."));
    assert!(study_set.quiz.is_none());
    assert!(study_set.flashcards.is_none());
}

#[test]
fn given_quiz_when_setting_flashcards_then_quiz_survives() {
    let mut study_set = sample_study_set();
    study_set.set_notes("Notes.".to_string());
    study_set.set_quiz(vec![QuizItem::new("Q?".to_string(), "A.".to_string())]);

    study_set.set_flashcards(vec![Flashcard::new("F".to_string(), "B".to_string())]);

    assert!(study_set.quiz.is_some());
    assert!(study_set.flashcards.is_some());
}
