use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{NoteGenerator, SpeechRecognizer};
use crate::presentation::state::AppState;

use super::ErrorResponse;
use super::study_set::{FlashcardResponse, parse_session_id};

#[tracing::instrument(skip(state))]
pub async fn generate_flashcards_handler<R, G>(
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

    let study_set = match state.sessions.get(session_id) {
        Some(set) => set,
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Unknown session".to_string(),
                }),
            )
                .into_response();
        }
    };

    let notes = match study_set.notes {
        Some(notes) => notes,
        None => {
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: "No study notes available to generate flashcards from".to_string(),
                }),
            )
                .into_response();
        }
    };

    let flashcards = match state.lecture_service.make_flashcards(&notes).await {
        Ok(cards) => cards,
        Err(e) => {
            tracing::warn!(error = %e, "Flashcard generation failed");
            return (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Flashcards could not be generated".to_string(),
                }),
            )
                .into_response();
        }
    };

    let cards: Vec<FlashcardResponse> = flashcards
        .iter()
        .map(|card| FlashcardResponse {
            front: card.front.clone(),
            back: card.back.clone(),
        })
        .collect();

    if state
        .sessions
        .update(session_id, |set| set.set_flashcards(flashcards))
        .is_none()
    {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Unknown session".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(session_id = %session_id.as_uuid(), cards = cards.len(), "Flashcards generated");

    (StatusCode::OK, Json(cards)).into_response()
}
