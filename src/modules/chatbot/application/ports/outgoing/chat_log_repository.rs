use async_trait::async_trait;

use crate::chatbot::application::domain::entities::ChatLog;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct NewChatLog {
    pub session_key: String,
    pub user_query: String,
    pub ai_response: String,
    pub model_used: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatLogRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ChatLogRepository: Send + Sync {
    async fn save(&self, log: NewChatLog) -> Result<ChatLog, ChatLogRepositoryError>;

    async fn list(
        &self,
        page: PageRequest,
        search: Option<&str>,
    ) -> Result<PageResult<ChatLog>, ChatLogRepositoryError>;
}
