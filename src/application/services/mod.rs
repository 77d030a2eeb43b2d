mod lecture_service;
mod session_registry;

pub use lecture_service::{LectureService, UploadError, UploadOutcome};
pub use session_registry::{SessionId, SessionRegistry};
