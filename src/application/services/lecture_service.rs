use std::sync::Arc;

use crate::application::ports::{
    AudioDecoder, AudioDecoderError, GenerationError, NoteGenerator, RecognitionError,
    SpeechRecognizer,
};
use crate::domain::{Flashcard, Lecture, QuizItem, StudySet, Transcript, TranscriptFailure};

/// Orchestrates the forward-only pipeline:
/// upload bytes -> waveform -> transcript -> notes -> {quiz, flashcards}.
pub struct LectureService<R, G>
where
    R: SpeechRecognizer + ?Sized,
    G: NoteGenerator + ?Sized,
{
    decoder: Arc<dyn AudioDecoder>,
    recognizer: Arc<R>,
    generator: Arc<G>,
    max_recognition_secs: u32,
    min_summary_chars: usize,
}

/// Result of processing one upload. A recognition or generation failure
/// degrades the outcome instead of failing the request, so the study set
/// is always present.
#[derive(Debug)]
pub struct UploadOutcome {
    pub study_set: StudySet,
    pub notes_failure: Option<GenerationError>,
}

impl<R, G> LectureService<R, G>
where
    R: SpeechRecognizer + ?Sized,
    G: NoteGenerator + ?Sized,
{
    pub fn new(
        decoder: Arc<dyn AudioDecoder>,
        recognizer: Arc<R>,
        generator: Arc<G>,
        max_recognition_secs: u32,
        min_summary_chars: usize,
    ) -> Self {
        Self {
            decoder,
            recognizer,
            generator,
            max_recognition_secs,
            min_summary_chars,
        }
    }

    pub async fn process_upload(
        &self,
        data: &[u8],
        lecture: Lecture,
    ) -> Result<UploadOutcome, UploadError> {
        let waveform = self
            .decoder
            .decode(data, lecture.format)?
            .truncated(self.max_recognition_secs);

        tracing::debug!(
            duration_secs = waveform.duration_secs(),
            filename = %lecture.filename,
            "Waveform ready for recognition"
        );

        let transcript = match self.recognizer.recognize(&waveform).await {
            Ok(text) => Transcript::Recognized(text),
            Err(RecognitionError::Unintelligible) => {
                tracing::warn!(lecture_id = %lecture.id.as_uuid(), "Audio unintelligible");
                Transcript::Failed(TranscriptFailure::Unintelligible)
            }
            Err(RecognitionError::ServiceUnavailable(reason)) => {
                tracing::warn!(
                    lecture_id = %lecture.id.as_uuid(),
                    reason = %reason,
                    "Recognition service unavailable"
                );
                Transcript::Failed(TranscriptFailure::ServiceUnavailable)
            }
        };

        let mut study_set = StudySet::new(lecture, transcript);
        let mut notes_failure = None;

        if let Some(text) = study_set.transcript.text() {
            if text.chars().count() > self.min_summary_chars {
                match self.generator.summarize(text).await {
                    Ok(notes) => study_set.set_notes(notes),
                    Err(e) => {
                        tracing::warn!(error = %e, "Note generation failed");
                        notes_failure = Some(e);
                    }
                }
            }
        }

        Ok(UploadOutcome {
            study_set,
            notes_failure,
        })
    }

    pub async fn make_quiz(&self, notes: &str) -> Result<Vec<QuizItem>, GenerationError> {
        self.generator.quiz(notes).await
    }

    pub async fn make_flashcards(&self, notes: &str) -> Result<Vec<Flashcard>, GenerationError> {
        self.generator.flashcards(notes).await
    }

    pub fn min_summary_chars(&self) -> usize {
        self.min_summary_chars
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("decode: {0}")]
    Decode(#[from] AudioDecoderError),
}
