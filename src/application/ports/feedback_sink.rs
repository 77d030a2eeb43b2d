use async_trait::async_trait;

/// Append-only sink for free-text user feedback.
#[async_trait]
pub trait FeedbackSink: Send + Sync {
    async fn append(&self, text: &str) -> Result<(), FeedbackError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("failed to write feedback: {0}")]
    WriteFailed(#[from] std::io::Error),
}
