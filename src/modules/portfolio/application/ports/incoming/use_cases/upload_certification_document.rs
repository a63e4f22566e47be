use async_trait::async_trait;
use uuid::Uuid;

use crate::media::application::domain::UploadPolicyError;
use crate::portfolio::application::domain::entities::Certification;
use crate::shared::multipart::UploadedFile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadCertificationDocumentError {
    #[error("Certification not found")]
    NotFound,

    #[error("Invalid upload: {0}")]
    InvalidUpload(UploadPolicyError),

    #[error("Storage error: {0}")]
    StorageFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UploadCertificationDocumentUseCase: Send + Sync {
    /// Image documents also get a thumbnail. Previous files are removed.
    async fn execute(
        &self,
        certification_id: Uuid,
        file: UploadedFile,
    ) -> Result<Certification, UploadCertificationDocumentError>;
}
