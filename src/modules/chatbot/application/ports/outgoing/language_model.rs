use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::chatbot::application::domain::prompt::Prompt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageModelError {
    #[error("Language model is not configured")]
    NotConfigured,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Stream failed: {0}")]
    Stream(String),
}

/// Text fragments in arrival order.
pub type TextStream = BoxStream<'static, Result<String, LanguageModelError>>;

#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn stream(&self, model: &str, prompt: &Prompt) -> Result<TextStream, LanguageModelError>;
}
