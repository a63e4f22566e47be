use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactMessage;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListContactMessagesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListContactMessagesUseCase: Send + Sync {
    /// Newest first.
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<ContactMessage>, ListContactMessagesError>;
}
