use std::sync::Arc;

use crate::application::ports::SpeechRecognizer;

use super::http_recognizer::HttpSpeechRecognizer;
use super::mock_recognizer::MockSpeechRecognizer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecognizerProvider {
    Remote,
    Mock,
}

#[derive(Debug, thiserror::Error)]
pub enum RecognizerFactoryError {
    #[error("API key required for remote recognition")]
    MissingApiKey,
}

pub struct SpeechRecognizerFactory;

impl SpeechRecognizerFactory {
    pub fn create(
        provider: RecognizerProvider,
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
        language: Option<String>,
    ) -> Result<Arc<dyn SpeechRecognizer>, RecognizerFactoryError> {
        match provider {
            RecognizerProvider::Remote => {
                let key = api_key.ok_or(RecognizerFactoryError::MissingApiKey)?;
                Ok(Arc::new(HttpSpeechRecognizer::new(
                    key, base_url, model, language,
                )))
            }
            RecognizerProvider::Mock => Ok(Arc::new(MockSpeechRecognizer::default())),
        }
    }
}
