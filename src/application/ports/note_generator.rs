use async_trait::async_trait;

use crate::domain::{Flashcard, QuizItem};

/// Generation boundary: condensed notes from a transcript, and quiz or
/// flashcard study aids from notes. Backends range from a remote
/// generative API to a purely local heuristic.
#[async_trait]
pub trait NoteGenerator: Send + Sync {
    async fn summarize(&self, transcript: &str) -> Result<String, GenerationError>;

    async fn quiz(&self, notes: &str) -> Result<Vec<QuizItem>, GenerationError>;

    async fn flashcards(&self, notes: &str) -> Result<Vec<Flashcard>, GenerationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
