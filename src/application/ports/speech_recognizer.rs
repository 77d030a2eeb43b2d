use async_trait::async_trait;

use crate::domain::Waveform;

/// Speech-to-text boundary. Implementations receive the already-normalized
/// waveform and return recognized plain text.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, waveform: &Waveform) -> Result<String, RecognitionError>;
}

/// The two failure modes callers may observe at this boundary.
#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("audio could not be understood")]
    Unintelligible,
    #[error("recognition service unavailable: {0}")]
    ServiceUnavailable(String),
}
