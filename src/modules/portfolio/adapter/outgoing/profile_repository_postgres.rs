use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::portfolio::adapter::outgoing::sea_orm_entity::profiles::{
    self, ActiveModel, Column, Entity,
};
use crate::portfolio::application::domain::drafts::{normalize_optional, ProfileDraft};
use crate::portfolio::application::domain::entities::{Profile, DEFAULT_PROFILE_IMAGE};
use crate::portfolio::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn update_where_id(
        &self,
        id: Uuid,
        model: ActiveModel,
    ) -> Result<Profile, ProfileRepositoryError> {
        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_domain)
            .ok_or(ProfileRepositoryError::NotFound)
    }
}

fn draft_to_active(draft: ProfileDraft) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        full_name: Set(draft.full_name.trim().to_string()),
        headline: Set(draft.headline.trim().to_string()),
        bio: Set(draft.bio.trim().to_string()),
        email: Set(draft.email.trim().to_lowercase()),
        phone: Set(normalize_optional(draft.phone)),
        location: Set(normalize_optional(draft.location)),
        github_url: Set(normalize_optional(draft.github_url)),
        linkedin_url: Set(normalize_optional(draft.linkedin_url)),
        image: NotSet,
        resume: NotSet,
        created_at: NotSet,
        updated_at: NotSet,
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn get(&self) -> Result<Option<Profile>, ProfileRepositoryError> {
        let row = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_domain))
    }

    async fn upsert(&self, draft: ProfileDraft) -> Result<Profile, ProfileRepositoryError> {
        let mut model = draft_to_active(draft);

        if let Some(existing) = self.get().await? {
            model.updated_at = Set(Utc::now().fixed_offset());
            return self.update_where_id(existing.id, model).await;
        }

        let now = Utc::now().fixed_offset();
        model.id = Set(Uuid::new_v4());
        model.image = Set(DEFAULT_PROFILE_IMAGE.to_string());
        model.resume = Set(None);
        model.created_at = Set(now);
        model.updated_at = Set(now);

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn set_image(&self, id: Uuid, image: &str) -> Result<Profile, ProfileRepositoryError> {
        let model = ActiveModel {
            image: Set(image.to_string()),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        self.update_where_id(id, model).await
    }

    async fn set_resume(&self, id: Uuid, resume: &str) -> Result<Profile, ProfileRepositoryError> {
        let model = ActiveModel {
            resume: Set(Some(resume.to_string())),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        self.update_where_id(id, model).await
    }
}

fn model_to_domain(model: profiles::Model) -> Profile {
    Profile {
        id: model.id,
        full_name: model.full_name,
        headline: model.headline,
        bio: model.bio,
        email: model.email,
        phone: model.phone,
        location: model.location,
        github_url: model.github_url,
        linkedin_url: model.linkedin_url,
        image: model.image,
        resume: model.resume,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

fn map_db_err(err: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(err.to_string())
}
