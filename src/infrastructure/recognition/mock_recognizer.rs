use crate::application::ports::{RecognitionError, SpeechRecognizer};
use crate::domain::Waveform;

/// Returns a fixed transcript; stands in for the remote service in tests
/// and scaffold runs.
pub struct MockSpeechRecognizer {
    transcript: String,
}

impl MockSpeechRecognizer {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

impl Default for MockSpeechRecognizer {
    fn default() -> Self {
        Self::new("This is a mock lecture transcript produced without a recognition service.")
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    async fn recognize(&self, _waveform: &Waveform) -> Result<String, RecognitionError> {
        Ok(self.transcript.clone())
    }
}

/// Always fails with the given failure mode; used to exercise degraded
/// pipeline paths.
pub struct FailingSpeechRecognizer {
    unintelligible: bool,
}

impl FailingSpeechRecognizer {
    pub fn unintelligible() -> Self {
        Self {
            unintelligible: true,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unintelligible: false,
        }
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for FailingSpeechRecognizer {
    async fn recognize(&self, _waveform: &Waveform) -> Result<String, RecognitionError> {
        if self.unintelligible {
            Err(RecognitionError::Unintelligible)
        } else {
            Err(RecognitionError::ServiceUnavailable(
                "mock outage".to_string(),
            ))
        }
    }
}
