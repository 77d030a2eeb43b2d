use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{NoteGenerator, SpeechRecognizer};
use crate::application::services::SessionId;
use crate::domain::StudySet;
use crate::presentation::state::AppState;

use super::ErrorResponse;

pub const TOO_SHORT_BANNER: &str = "Transcript is too short to summarize.";
pub const NOTES_FAILED_BANNER: &str = "Study notes could not be generated.";

#[derive(Serialize)]
pub struct StudySetResponse {
    pub session_id: String,
    pub filename: String,
    pub transcript: Option<String>,
    pub transcript_banner: Option<String>,
    pub notes: Option<String>,
    pub notes_banner: Option<String>,
    pub quiz: Option<Vec<QuizItemResponse>>,
    pub flashcards: Option<Vec<FlashcardResponse>>,
}

#[derive(Serialize)]
pub struct QuizItemResponse {
    pub question: String,
    pub answer: String,
}

#[derive(Serialize)]
pub struct FlashcardResponse {
    pub front: String,
    pub back: String,
}

impl StudySetResponse {
    pub fn from_study_set(
        session_id: SessionId,
        study_set: &StudySet,
        min_summary_chars: usize,
    ) -> Self {
        let transcript = study_set.transcript.text().map(String::from);
        let transcript_banner = study_set.transcript.banner().map(String::from);

        let notes_banner = match (&transcript, &study_set.notes) {
            (Some(text), None) if text.chars().count() <= min_summary_chars => {
                Some(TOO_SHORT_BANNER.to_string())
            }
            (Some(_), None) => Some(NOTES_FAILED_BANNER.to_string()),
            _ => None,
        };

        Self {
            session_id: session_id.as_uuid().to_string(),
            filename: study_set.lecture.filename.clone(),
            transcript,
            transcript_banner,
            notes: study_set.notes.clone(),
            notes_banner,
            quiz: study_set.quiz.as_ref().map(|items| {
                items
                    .iter()
                    .map(|item| QuizItemResponse {
                        question: item.question.clone(),
                        answer: item.answer.clone(),
                    })
                    .collect()
            }),
            flashcards: study_set.flashcards.as_ref().map(|cards| {
                cards
                    .iter()
                    .map(|card| FlashcardResponse {
                        front: card.front.clone(),
                        back: card.back.clone(),
                    })
                    .collect()
            }),
        }
    }
}

pub fn parse_session_id(raw: &str) -> Result<SessionId, (StatusCode, Json<ErrorResponse>)> {
    Uuid::parse_str(raw).map(SessionId::from_uuid).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid session id: {}", raw),
            }),
        )
    })
}

#[tracing::instrument(skip(state))]
pub async fn get_study_set_handler<R, G>(
    State(state): State<AppState<R, G>>,
    Path(session_id): Path<String>,
) -> impl IntoResponse
where
    R: SpeechRecognizer + 'static + ?Sized,
    G: NoteGenerator + 'static + ?Sized,
{
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(rejection) => return rejection.into_response(),
    };

    match state.sessions.get(session_id) {
        Some(study_set) => {
            let response = StudySetResponse::from_study_set(
                session_id,
                &study_set,
                state.lecture_service.min_summary_chars(),
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Unknown session".to_string(),
            }),
        )
            .into_response(),
    }
}

#[tracing::instrument(skip(state))]
pub async fn delete_session_handler<R, G>(
    State(state): State<AppState<R, G>>,
    Path(session_id): Path<String>,
) -> impl IntoResponse
where
    R: SpeechRecognizer + 'static + ?Sized,
    G: NoteGenerator + 'static + ?Sized,
{
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(rejection) => return rejection.into_response(),
    };

    if state.sessions.remove(session_id) {
        tracing::info!(session_id = %session_id.as_uuid(), "Session cleared");
        StatusCode::NO_CONTENT.into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Unknown session".to_string(),
            }),
        )
            .into_response()
    }
}
