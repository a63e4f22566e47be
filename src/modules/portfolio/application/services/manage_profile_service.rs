use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::media::application::domain::{UploadKind, UploadPolicy};
use crate::media::application::ports::outgoing::MediaStorage;
use crate::portfolio::application::domain::drafts::{ProfileDraft, Validate};
use crate::portfolio::application::domain::entities::{Profile, DEFAULT_PROFILE_IMAGE};
use crate::portfolio::application::ports::{
    incoming::use_cases::{ManageProfileError, ManageProfileUseCase},
    outgoing::{ProfileRepository, ProfileRepositoryError},
};
use crate::shared::multipart::UploadedFile;

#[derive(Clone)]
pub struct ManageProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    repository: R,
    storage: Arc<dyn MediaStorage + Send + Sync>,
}

fn map_repo_err(err: ProfileRepositoryError) -> ManageProfileError {
    match err {
        ProfileRepositoryError::NotFound => ManageProfileError::NotFound,
        other => ManageProfileError::RepositoryError(other.to_string()),
    }
}

impl<R> ManageProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    pub fn new(repository: R, storage: Arc<dyn MediaStorage + Send + Sync>) -> Self {
        Self {
            repository,
            storage,
        }
    }

    async fn current(&self) -> Result<Profile, ManageProfileError> {
        self.repository
            .get()
            .await
            .map_err(map_repo_err)?
            .ok_or(ManageProfileError::NotFound)
    }

    async fn store(&self, kind: UploadKind, file: &UploadedFile) -> Result<String, ManageProfileError> {
        let policy = UploadPolicy::for_kind(kind);
        policy
            .validate(&file.file_name, file.bytes.len() as u64)
            .map_err(ManageProfileError::InvalidUpload)?;

        self.storage
            .store(policy.folder, &file.file_name, &file.bytes)
            .await
            .map_err(|e| ManageProfileError::StorageFailed(e.to_string()))
    }

    /// Failures are logged only.
    async fn discard(&self, path: &str) {
        if let Err(e) = self.storage.delete(path).await {
            warn!(path = %path, error = %e, "Failed to delete media file");
        }
    }
}

#[async_trait]
impl<R> ManageProfileUseCase for ManageProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn get(&self) -> Result<Profile, ManageProfileError> {
        self.current().await
    }

    async fn upsert(&self, draft: ProfileDraft) -> Result<Profile, ManageProfileError> {
        draft.validate().map_err(ManageProfileError::Validation)?;

        let profile = self.repository.upsert(draft).await.map_err(map_repo_err)?;
        info!(profile_id = %profile.id, "Profile saved");

        Ok(profile)
    }

    async fn replace_image(&self, file: UploadedFile) -> Result<Profile, ManageProfileError> {
        let existing = self.current().await?;
        let new_path = self.store(UploadKind::ProfileImage, &file).await?;

        let updated = match self.repository.set_image(existing.id, &new_path).await {
            Ok(profile) => profile,
            Err(e) => {
                if new_path != existing.image {
                    self.discard(&new_path).await;
                }
                return Err(map_repo_err(e));
            }
        };

        if existing.image != DEFAULT_PROFILE_IMAGE && existing.image != new_path {
            self.discard(&existing.image).await;
        }

        info!(profile_id = %updated.id, image = %updated.image, "Profile image replaced");
        Ok(updated)
    }

    async fn replace_resume(&self, file: UploadedFile) -> Result<Profile, ManageProfileError> {
        let existing = self.current().await?;
        let new_path = self.store(UploadKind::Resume, &file).await?;

        let updated = match self.repository.set_resume(existing.id, &new_path).await {
            Ok(profile) => profile,
            Err(e) => {
                if existing.resume.as_deref() != Some(new_path.as_str()) {
                    self.discard(&new_path).await;
                }
                return Err(map_repo_err(e));
            }
        };

        if let Some(old) = existing.resume.as_deref().filter(|old| *old != new_path) {
            self.discard(old).await;
        }

        info!(profile_id = %updated.id, "Resume replaced");
        Ok(updated)
    }
}
