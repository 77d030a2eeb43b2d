use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{NoteGenerator, SpeechRecognizer};
use crate::infrastructure::observability::preview;
use crate::presentation::state::AppState;

use super::ErrorResponse;

#[derive(Deserialize)]
pub struct FeedbackRequest {
    pub feedback: String,
}

#[derive(Serialize)]
pub struct FeedbackResponse {
    pub message: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn feedback_handler<R, G>(
    State(state): State<AppState<R, G>>,
    Json(request): Json<FeedbackRequest>,
) -> impl IntoResponse
where
    R: SpeechRecognizer + 'static + ?Sized,
    G: NoteGenerator + 'static + ?Sized,
{
    let text = request.feedback.trim();

    if text.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Please enter feedback before submitting".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(feedback = %preview(text), "Recording feedback");

    if let Err(e) = state.feedback_sink.append(text).await {
        tracing::error!(error = %e, "Failed to save feedback");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to save feedback".to_string(),
            }),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        Json(FeedbackResponse {
            message: "Thank you for your feedback!".to_string(),
        }),
    )
        .into_response()
}
