//! Sentiment Analyzer Port - Scores the polarity of a message.

use async_trait::async_trait;

/// Errors from a sentiment collaborator
#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    #[error("Sentiment analysis failed: {0}")]
    Failed(String),
}

#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    /// Polarity in `[-1, 1]`; negative values are unhappy.
    async fn polarity(&self, text: &str) -> Result<f32, SentimentError>;
}
