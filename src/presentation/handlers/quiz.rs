use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{NoteGenerator, SpeechRecognizer};
use crate::presentation::state::AppState;

use super::ErrorResponse;
use super::study_set::{QuizItemResponse, parse_session_id};

#[tracing::instrument(skip(state))]
pub async fn generate_quiz_handler<R, G>(
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
                    error: "No study notes available to generate a quiz from".to_string(),
                }),
            )
                .into_response();
        }
    };

    let quiz = match state.lecture_service.make_quiz(&notes).await {
        Ok(quiz) => quiz,
        Err(e) => {
            tracing::warn!(error = %e, "Quiz generation failed");
            return (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Quiz could not be generated".to_string(),
                }),
            )
                .into_response();
        }
    };

    let items: Vec<QuizItemResponse> = quiz
        .iter()
        .map(|item| QuizItemResponse {
            question: item.question.clone(),
            answer: item.answer.clone(),
        })
        .collect();

    if state
        .sessions
        .update(session_id, |set| set.set_quiz(quiz))
        .is_none()
    {
        // Session vanished between read and write
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Unknown session".to_string(),
            }),
        )
            .into_response();
    }

    tracing::info!(session_id = %session_id.as_uuid(), items = items.len(), "Quiz generated");

    (StatusCode::OK, Json(items)).into_response()
}
