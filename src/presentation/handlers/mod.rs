mod feedback;
mod flashcards;
mod health;
mod page;
mod quiz;
mod study_set;
mod upload;

use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub use feedback::feedback_handler;
pub use flashcards::generate_flashcards_handler;
pub use health::health_handler;
pub use page::index_handler;
pub use quiz::generate_quiz_handler;
pub use study_set::{
    NOTES_FAILED_BANNER, StudySetResponse, TOO_SHORT_BANNER, delete_session_handler,
    get_study_set_handler,
};
pub use upload::upload_lecture_handler;
