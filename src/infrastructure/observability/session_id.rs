use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

use crate::application::services::SessionId;

pub const SESSION_ID_HEADER: &str = "x-session-id";

/// The session the client presented, or a fresh one when the header is
/// absent or malformed. Handlers read this to decide whether an upload
/// replaces an existing study set.
#[derive(Clone, Copy, Debug)]
pub struct ClientSession(pub SessionId);

pub async fn session_id_middleware(mut request: Request, next: Next) -> Response {
    let session_id = request
        .headers()
        .get(SESSION_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok())
        .map(SessionId::from_uuid)
        .unwrap_or_else(SessionId::new);

    request.extensions_mut().insert(ClientSession(session_id));

    let span = tracing::info_span!(
        "request",
        session_id = %session_id.as_uuid(),
        method = %request.method(),
        uri = %request.uri().path()
    );

    let mut response = next.run(request).instrument(span).await;

    if let Ok(header_value) = HeaderValue::from_str(&session_id.as_uuid().to_string()) {
        response
            .headers_mut()
            .insert(SESSION_ID_HEADER, header_value);
    }

    response
}
