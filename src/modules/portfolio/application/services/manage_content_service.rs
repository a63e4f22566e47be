use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::media::application::ports::outgoing::MediaStorage;
use crate::portfolio::application::domain::drafts::Validate;
use crate::portfolio::application::ports::{
    incoming::use_cases::{ManageContentError, ManageContentUseCase},
    outgoing::{ContentRecord, ContentRepository, ContentRepositoryError},
};

pub struct ManageContentService<C, R>
where
    C: ContentRecord,
    R: ContentRepository<C> + Send + Sync,
{
    repository: R,
    storage: Arc<dyn MediaStorage + Send + Sync>,
    _record: PhantomData<fn() -> C>,
}

impl<C, R> ManageContentService<C, R>
where
    C: ContentRecord,
    R: ContentRepository<C> + Send + Sync,
{
    pub fn new(repository: R, storage: Arc<dyn MediaStorage + Send + Sync>) -> Self {
        Self {
            repository,
            storage,
            _record: PhantomData,
        }
    }
}

fn map_repo_err(err: ContentRepositoryError) -> ManageContentError {
    match err {
        ContentRepositoryError::NotFound => ManageContentError::NotFound,
        other => ManageContentError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<C, R> ManageContentUseCase<C> for ManageContentService<C, R>
where
    C: ContentRecord,
    R: ContentRepository<C> + Send + Sync,
{
    async fn list(&self) -> Result<Vec<C>, ManageContentError> {
        self.repository.list().await.map_err(map_repo_err)
    }

    async fn get(&self, id: Uuid) -> Result<C, ManageContentError> {
        self.repository.find(id).await.map_err(map_repo_err)
    }

    async fn create(&self, draft: C::Draft) -> Result<C, ManageContentError> {
        draft.validate().map_err(ManageContentError::Validation)?;

        let created = self.repository.create(draft).await.map_err(map_repo_err)?;
        info!(kind = C::KIND, id = %created.id(), "Content created");

        Ok(created)
    }

    async fn update(&self, id: Uuid, draft: C::Draft) -> Result<C, ManageContentError> {
        draft.validate().map_err(ManageContentError::Validation)?;

        let updated = self
            .repository
            .update(id, draft)
            .await
            .map_err(map_repo_err)?;
        info!(kind = C::KIND, id = %id, "Content updated");

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ManageContentError> {
        let existing = self.repository.find(id).await.map_err(map_repo_err)?;

        self.repository.delete(id).await.map_err(map_repo_err)?;
        info!(kind = C::KIND, id = %id, "Content deleted");

        for path in existing.stored_files() {
            if let Err(e) = self.storage.delete(&path).await {
                warn!(kind = C::KIND, path = %path, error = %e, "Orphaned media file");
            }
        }

        Ok(())
    }
}
