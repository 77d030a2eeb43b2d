use std::sync::Arc;

use crate::application::ports::{FeedbackSink, NoteGenerator, SpeechRecognizer};
use crate::application::services::{LectureService, SessionRegistry};
use crate::presentation::config::Settings;

pub struct AppState<R, G>
where
    R: SpeechRecognizer + ?Sized,
    G: NoteGenerator + ?Sized,
{
    pub lecture_service: Arc<LectureService<R, G>>,
    pub sessions: Arc<SessionRegistry>,
    pub feedback_sink: Arc<dyn FeedbackSink>,
    pub settings: Settings,
}

impl<R, G> Clone for AppState<R, G>
where
    R: SpeechRecognizer + ?Sized,
    G: NoteGenerator + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            lecture_service: Arc::clone(&self.lecture_service),
            sessions: Arc::clone(&self.sessions),
            feedback_sink: Arc::clone(&self.feedback_sink),
            settings: self.settings.clone(),
        }
    }
}
