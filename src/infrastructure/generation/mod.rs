mod gemini_generator;
mod generator_factory;
mod heuristic_generator;
mod mock_generator;

pub use gemini_generator::{GeminiNoteGenerator, parse_qa_pairs};
pub use generator_factory::{GeneratorFactoryError, GeneratorProvider, NoteGeneratorFactory};
pub use heuristic_generator::{
    FlashcardStyle, HeuristicNoteGenerator, TOO_SHORT_NOTES, compose_flashcards, compose_quiz,
    extract_notes,
};
pub use mock_generator::{FailingNoteGenerator, MockNoteGenerator};
