use super::{Flashcard, Lecture, QuizItem, Transcript};

/// Everything derived from one uploaded lecture within one session.
///
/// Data flows strictly forward: transcript -> notes -> {quiz, flashcards}.
/// Replacing an upstream value invalidates everything downstream of it.
#[derive(Debug, Clone, PartialEq)]
pub struct StudySet {
    pub lecture: Lecture,
    pub transcript: Transcript,
    pub notes: Option<String>,
    pub quiz: Option<Vec<QuizItem>>,
    pub flashcards: Option<Vec<Flashcard>>,
}

impl StudySet {
    pub fn new(lecture: Lecture, transcript: Transcript) -> Self {
        Self {
            lecture,
            transcript,
            notes: None,
            quiz: None,
            flashcards: None,
        }
    }

    /// New notes invalidate the quiz and flashcards derived from the old ones.
    pub fn set_notes(&mut self, notes: String) {
        self.notes = Some(notes);
        self.quiz = None;
        self.flashcards = None;
    }

    pub fn set_quiz(&mut self, quiz: Vec<QuizItem>) {
        self.quiz = Some(quiz);
    }

    pub fn set_flashcards(&mut self, flashcards: Vec<Flashcard>) {
        self.flashcards = Some(flashcards);
    }
}
