use std::sync::Arc;

use crate::application::ports::NoteGenerator;

use super::gemini_generator::GeminiNoteGenerator;
use super::heuristic_generator::{FlashcardStyle, HeuristicNoteGenerator};
use super::mock_generator::MockNoteGenerator;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeneratorProvider {
    Remote,
    Heuristic,
    Mock,
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratorFactoryError {
    #[error("API key required for remote generation")]
    MissingApiKey,
}

pub struct NoteGeneratorFactory;

impl NoteGeneratorFactory {
    pub fn create(
        provider: GeneratorProvider,
        api_key: Option<String>,
        base_url: Option<String>,
        model: Option<String>,
        flashcard_style: FlashcardStyle,
    ) -> Result<Arc<dyn NoteGenerator>, GeneratorFactoryError> {
        match provider {
            GeneratorProvider::Remote => {
                let key = api_key.ok_or(GeneratorFactoryError::MissingApiKey)?;
                Ok(Arc::new(GeminiNoteGenerator::new(key, base_url, model)))
            }
            GeneratorProvider::Heuristic => {
                Ok(Arc::new(HeuristicNoteGenerator::new(flashcard_style)))
            }
            GeneratorProvider::Mock => Ok(Arc::new(MockNoteGenerator)),
        }
    }
}
