mod init_tracing;
mod session_id;
mod text_preview;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use session_id::{ClientSession, SESSION_ID_HEADER, session_id_middleware};
pub use text_preview::preview;
pub use tracing_config::TracingConfig;
