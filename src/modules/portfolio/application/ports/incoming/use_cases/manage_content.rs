use async_trait::async_trait;
use uuid::Uuid;

use crate::portfolio::application::domain::drafts::DraftError;
use crate::portfolio::application::ports::outgoing::ContentRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManageContentError {
    #[error("Validation failed: {0}")]
    Validation(DraftError),

    #[error("Record not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Admin CRUD over one record type.
#[async_trait]
pub trait ManageContentUseCase<C: ContentRecord>: Send + Sync {
    async fn list(&self) -> Result<Vec<C>, ManageContentError>;

    async fn get(&self, id: Uuid) -> Result<C, ManageContentError>;

    async fn create(&self, draft: C::Draft) -> Result<C, ManageContentError>;

    async fn update(&self, id: Uuid, draft: C::Draft) -> Result<C, ManageContentError>;

    async fn delete(&self, id: Uuid) -> Result<(), ManageContentError>;
}
