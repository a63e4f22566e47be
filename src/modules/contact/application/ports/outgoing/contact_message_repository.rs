use async_trait::async_trait;

use crate::contact::application::domain::entities::ContactMessage;
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn save(
        &self,
        data: NewContactMessage,
    ) -> Result<ContactMessage, ContactMessageRepositoryError>;

    async fn list(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<ContactMessage>, ContactMessageRepositoryError>;
}
