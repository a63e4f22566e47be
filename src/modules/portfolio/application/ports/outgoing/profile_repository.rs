use async_trait::async_trait;
use uuid::Uuid;

use crate::portfolio::application::domain::drafts::ProfileDraft;
use crate::portfolio::application::domain::entities::Profile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// The site has a single profile row; the oldest one wins if several exist.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get(&self) -> Result<Option<Profile>, ProfileRepositoryError>;

    /// Updates the existing profile's text fields, or creates it.
    async fn upsert(&self, draft: ProfileDraft) -> Result<Profile, ProfileRepositoryError>;

    async fn set_image(&self, id: Uuid, image: &str) -> Result<Profile, ProfileRepositoryError>;

    async fn set_resume(&self, id: Uuid, resume: &str) -> Result<Profile, ProfileRepositoryError>;
}
