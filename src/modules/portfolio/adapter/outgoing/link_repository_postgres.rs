use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::portfolio::adapter::outgoing::sea_orm_entity::other_links::{
    self, ActiveModel, Column, Entity,
};
use crate::portfolio::application::domain::drafts::LinkDraft;
use crate::portfolio::application::domain::entities::OtherLink;
use crate::portfolio::application::ports::outgoing::{ContentRepository, ContentRepositoryError};

#[derive(Clone)]
pub struct LinkRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LinkRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn draft_to_active(draft: LinkDraft) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(draft.name.trim().to_string()),
        url: Set(draft.url.trim().to_string()),
        created_at: NotSet,
    }
}

#[async_trait]
impl ContentRepository<OtherLink> for LinkRepositoryPostgres {
    async fn list(&self) -> Result<Vec<OtherLink>, ContentRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_domain).collect())
    }

    async fn find(&self, id: Uuid) -> Result<OtherLink, ContentRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_domain)
            .ok_or(ContentRepositoryError::NotFound)
    }

    async fn create(&self, draft: LinkDraft) -> Result<OtherLink, ContentRepositoryError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn update(&self, id: Uuid, draft: LinkDraft) -> Result<OtherLink, ContentRepositoryError> {
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

fn model_to_domain(model: other_links::Model) -> OtherLink {
    OtherLink {
        id: model.id,
        name: model.name,
        url: model.url,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn map_db_err(err: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(err.to_string())
}
