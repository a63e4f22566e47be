use async_trait::async_trait;

use crate::chatbot::application::domain::entities::ChatHistory;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatHistoryStoreError {
    #[error("Store error: {0}")]
    Backend(String),

    #[error("Stored history is corrupt: {0}")]
    Corrupt(String),
}

#[async_trait]
pub trait ChatHistoryStore: Send + Sync {
    /// Unknown sessions have an empty history.
    async fn load(&self, session_key: &str) -> Result<ChatHistory, ChatHistoryStoreError>;

    async fn save(&self, session_key: &str, history: &ChatHistory) -> Result<(), ChatHistoryStoreError>;
}
