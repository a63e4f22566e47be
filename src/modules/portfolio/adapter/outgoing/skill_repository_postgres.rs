use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::portfolio::adapter::outgoing::sea_orm_entity::skills::{
    self, ActiveModel, Column, Entity,
};
use crate::portfolio::application::domain::drafts::SkillDraft;
use crate::portfolio::application::domain::entities::{Skill, SkillCategory};
use crate::portfolio::application::ports::outgoing::{ContentRepository, ContentRepositoryError};

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn draft_to_active(draft: SkillDraft) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(draft.name.trim().to_string()),
        category: Set(draft.category.as_str().to_string()),
        created_at: NotSet,
    }
}

#[async_trait]
impl ContentRepository<Skill> for SkillRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Skill>, ContentRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_domain).collect()
    }

    async fn find(&self, id: Uuid) -> Result<Skill, ContentRepositoryError> {
        let row = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ContentRepositoryError::NotFound)?;

        model_to_domain(row)
    }

    async fn create(&self, draft: SkillDraft) -> Result<Skill, ContentRepositoryError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        model_to_domain(saved)
    }

    async fn update(&self, id: Uuid, draft: SkillDraft) -> Result<Skill, ContentRepositoryError> {
        let results = Entity::update_many()
            .set(draft_to_active(draft))
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = results
            .into_iter()
            .next()
            .ok_or(ContentRepositoryError::NotFound)?;

        model_to_domain(row)
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

fn model_to_domain(model: skills::Model) -> Result<Skill, ContentRepositoryError> {
    let category = model
        .category
        .parse::<SkillCategory>()
        .map_err(|e| ContentRepositoryError::DatabaseError(e.to_string()))?;

    Ok(Skill {
        id: model.id,
        name: model.name,
        category,
        created_at: model.created_at.with_timezone(&Utc),
    })
}

fn map_db_err(err: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(err.to_string())
}
