use axum::Extension;
use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{NoteGenerator, SpeechRecognizer};
use crate::application::services::UploadError;
use crate::domain::{AudioFormat, Lecture};
use crate::infrastructure::observability::ClientSession;
use crate::presentation::state::AppState;

use super::study_set::StudySetResponse;
use super::ErrorResponse;

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_lecture_handler<R, G>(
    State(state): State<AppState<R, G>>,
    Extension(ClientSession(session_id)): Extension<ClientSession>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    R: SpeechRecognizer + 'static + ?Sized,
    G: NoteGenerator + 'static + ?Sized,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("lecture").to_string();
    let content_type = field.content_type().map(String::from);

    let format = AudioFormat::from_extension(&filename)
        .or_else(|| content_type.as_deref().and_then(AudioFormat::from_mime));

    let format = match format {
        Some(f) => f,
        None => {
            tracing::warn!(filename = %filename, content_type = ?content_type, "Unsupported audio format");
            return (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorResponse {
                    error: format!("Unsupported audio format: {}", filename),
                }),
            )
                .into_response();
        }
    };

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    if data.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Uploaded file is empty".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(filename = %filename, bytes = data.len(), "Processing lecture upload");

    let lecture = Lecture::new(filename, format, data.len() as u64);

    let outcome = match state.lecture_service.process_upload(&data, lecture).await {
        Ok(outcome) => outcome,
        Err(UploadError::Decode(e)) => {
            tracing::warn!(error = %e, "Audio decoding failed");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: format!("Could not decode audio: {}", e),
                }),
            )
                .into_response();
        }
    };

    // Same session id -> the previous study set (and everything derived
    // from it) is replaced wholesale.
    state.sessions.put(session_id, outcome.study_set.clone());

    tracing::info!(
        session_id = %session_id.as_uuid(),
        recognized = outcome.study_set.transcript.is_recognized(),
        has_notes = outcome.study_set.notes.is_some(),
        "Lecture processed"
    );

    let response = StudySetResponse::from_study_set(
        session_id,
        &outcome.study_set,
        state.lecture_service.min_summary_chars(),
    );

    (StatusCode::CREATED, Json(response)).into_response()
}
