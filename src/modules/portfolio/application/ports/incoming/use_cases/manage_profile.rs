use async_trait::async_trait;

use crate::media::application::domain::UploadPolicyError;
use crate::portfolio::application::domain::drafts::{DraftError, ProfileDraft};
use crate::portfolio::application::domain::entities::Profile;
use crate::shared::multipart::UploadedFile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ManageProfileError {
    #[error("Validation failed: {0}")]
    Validation(DraftError),

    #[error("Profile not found")]
    NotFound,

    #[error("Invalid upload: {0}")]
    InvalidUpload(UploadPolicyError),

    #[error("Storage error: {0}")]
    StorageFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ManageProfileUseCase: Send + Sync {
    async fn get(&self) -> Result<Profile, ManageProfileError>;

    async fn upsert(&self, draft: ProfileDraft) -> Result<Profile, ManageProfileError>;

    /// Stores the new image and removes the previous one unless it is the default asset.
    async fn replace_image(&self, file: UploadedFile) -> Result<Profile, ManageProfileError>;

    async fn replace_resume(&self, file: UploadedFile) -> Result<Profile, ManageProfileError>;
}
