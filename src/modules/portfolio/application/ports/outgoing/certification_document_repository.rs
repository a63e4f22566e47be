use async_trait::async_trait;
use uuid::Uuid;

use super::content_repository::ContentRepositoryError;
use crate::portfolio::application::domain::entities::Certification;

#[async_trait]
pub trait CertificationDocumentRepository: Send + Sync {
    async fn find(&self, id: Uuid) -> Result<Certification, ContentRepositoryError>;

    async fn set_document(
        &self,
        id: Uuid,
        document: &str,
        thumbnail: Option<&str>,
    ) -> Result<Certification, ContentRepositoryError>;
}
