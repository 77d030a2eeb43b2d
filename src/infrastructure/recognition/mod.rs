mod http_recognizer;
mod mock_recognizer;
mod recognizer_factory;

pub use http_recognizer::HttpSpeechRecognizer;
pub use mock_recognizer::{FailingSpeechRecognizer, MockSpeechRecognizer};
pub use recognizer_factory::{RecognizerFactoryError, RecognizerProvider, SpeechRecognizerFactory};
