mod sentences;
mod transcript_sanitizer;

pub use sentences::{split_sentences, truncate_chars};
pub use transcript_sanitizer::sanitize_transcript;
