use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactMessage;
use crate::contact::application::ports::{
    incoming::use_cases::{ListContactMessagesError, ListContactMessagesUseCase},
    outgoing::ContactMessageRepository,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct ListContactMessagesService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    repository: R,
}

impl<R> ListContactMessagesService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListContactMessagesUseCase for ListContactMessagesService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<ContactMessage>, ListContactMessagesError> {
        self.repository
            .list(page)
            .await
            .map_err(|e| ListContactMessagesError::RepositoryError(e.to_string()))
    }
}
