mod audio_decoder;
mod feedback_sink;
mod note_generator;
mod speech_recognizer;

pub use audio_decoder::{AudioDecoder, AudioDecoderError};
pub use feedback_sink::{FeedbackError, FeedbackSink};
pub use note_generator::{GenerationError, NoteGenerator};
pub use speech_recognizer::{RecognitionError, SpeechRecognizer};
