use async_trait::async_trait;

use crate::chatbot::application::domain::entities::ChatLog;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListChatLogsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, Default)]
pub struct ListChatLogsQuery {
    pub page: PageRequest,
    /// Case-insensitive match on the question or the answer.
    pub search: Option<String>,
}

#[async_trait]
pub trait ListChatLogsUseCase: Send + Sync {
    /// Newest first.
    async fn execute(
        &self,
        query: ListChatLogsQuery,
    ) -> Result<PageResult<ChatLog>, ListChatLogsError>;
}
