use std::path::PathBuf;

use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{FeedbackError, FeedbackSink};

/// Appends timestamped feedback lines to a flat file, creating it on
/// first use. No rotation.
pub struct FileFeedbackLog {
    path: PathBuf,
}

impl FileFeedbackLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl FeedbackSink for FileFeedbackLog {
    async fn append(&self, text: &str) -> Result<(), FeedbackError> {
        let line = format!("{}: {}\n", Utc::now().to_rfc3339(), text);

        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;

        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        tracing::info!(path = %self.path.display(), chars = text.len(), "Feedback recorded");

        Ok(())
    }
}
