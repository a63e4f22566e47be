use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::portfolio::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::portfolio::application::domain::drafts::{normalize_optional, ProjectDraft};
use crate::portfolio::application::domain::entities::Project;
use crate::portfolio::application::ports::outgoing::{ContentRepository, ContentRepositoryError};

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn draft_to_active(draft: ProjectDraft) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        title: Set(draft.title.trim().to_string()),
        description: Set(draft.description.trim().to_string()),
        technologies: Set(draft.technologies.trim().to_string()),
        link: Set(normalize_optional(draft.link)),
        created_at: NotSet,
    }
}

#[async_trait]
impl ContentRepository<Project> for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Project>, ContentRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_domain).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Project, ContentRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_domain)
            .ok_or(ContentRepositoryError::NotFound)
    }

    async fn create(&self, draft: ProjectDraft) -> Result<Project, ContentRepositoryError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn update(&self, id: Uuid, draft: ProjectDraft) -> Result<Project, ContentRepositoryError> {
        let results = Entity::update_many()
            .set(draft_to_active(draft))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_domain)
            .ok_or(ContentRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ContentRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn model_to_domain(model: projects::Model) -> Project {
    Project {
        id: model.id,
        title: model.title,
        description: model.description,
        technologies: model.technologies,
        link: model.link,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn map_db_err(err: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(err.to_string())
}
