use crate::application::ports::{GenerationError, NoteGenerator};
use crate::domain::{Flashcard, QuizItem};

/// Fixed canned output for tests and scaffold runs.
pub struct MockNoteGenerator;

#[async_trait::async_trait]
impl NoteGenerator for MockNoteGenerator {
    async fn summarize(&self, _transcript: &str) -> Result<String, GenerationError> {
        Ok("Mock study notes.".to_string())
    }

    async fn quiz(&self, _notes: &str) -> Result<Vec<QuizItem>, GenerationError> {
        Ok(vec![QuizItem::new(
            "Mock question?".to_string(),
            "Mock answer.".to_string(),
        )])
    }

    async fn flashcards(&self, _notes: &str) -> Result<Vec<Flashcard>, GenerationError> {
        Ok(vec![Flashcard::new(
            "Mock front".to_string(),
            "MOCK".to_string(),
        )])
    }
}

/// Always fails; used to exercise degraded generation paths.
pub struct FailingNoteGenerator;

#[async_trait::async_trait]
impl NoteGenerator for FailingNoteGenerator {
    async fn summarize(&self, _transcript: &str) -> Result<String, GenerationError> {
        Err(GenerationError::ApiRequestFailed("mock outage".to_string()))
    }

    async fn quiz(&self, _notes: &str) -> Result<Vec<QuizItem>, GenerationError> {
        Err(GenerationError::ApiRequestFailed("mock outage".to_string()))
    }

    async fn flashcards(&self, _notes: &str) -> Result<Vec<Flashcard>, GenerationError> {
        Err(GenerationError::ApiRequestFailed("mock outage".to_string()))
    }
}
