use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{NoteGenerator, SpeechRecognizer};
use crate::infrastructure::observability::session_id_middleware;
use crate::presentation::handlers::{
    delete_session_handler, feedback_handler, generate_flashcards_handler, generate_quiz_handler,
    get_study_set_handler, health_handler, index_handler, upload_lecture_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<R, G>(state: AppState<R, G>) -> Router
where
    R: SpeechRecognizer + 'static + ?Sized,
    G: NoteGenerator + 'static + ?Sized,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_upload_bytes = state.settings.upload.max_file_size_mb * 1024 * 1024;

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/lectures", post(upload_lecture_handler::<R, G>))
        .route(
            "/api/v1/sessions/{session_id}",
            get(get_study_set_handler::<R, G>).delete(delete_session_handler::<R, G>),
        )
        .route(
            "/api/v1/sessions/{session_id}/quiz",
            post(generate_quiz_handler::<R, G>),
        )
        .route(
            "/api/v1/sessions/{session_id}/flashcards",
            post(generate_flashcards_handler::<R, G>),
        )
        .route("/api/v1/feedback", post(feedback_handler::<R, G>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(session_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
