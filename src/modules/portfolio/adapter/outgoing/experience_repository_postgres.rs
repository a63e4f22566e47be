use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::portfolio::adapter::outgoing::sea_orm_entity::experiences::{
    self, ActiveModel, Column, Entity,
};
use crate::portfolio::application::domain::drafts::{normalize_optional, ExperienceDraft};
use crate::portfolio::application::domain::entities::Experience;
use crate::portfolio::application::ports::outgoing::{ContentRepository, ContentRepositoryError};

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn draft_to_active(draft: ExperienceDraft) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        role: Set(draft.role.trim().to_string()),
        company: Set(draft.company.trim().to_string()),
        location: Set(normalize_optional(draft.location)),
        start_date: Set(draft.start_date),
        end_date: Set(draft.end_date),
        description: Set(draft.description.trim().to_string()),
        created_at: NotSet,
    }
}

#[async_trait]
impl ContentRepository<Experience> for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, ContentRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_domain).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Experience, ContentRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_domain)
            .ok_or(ContentRepositoryError::NotFound)
    }

    async fn create(&self, draft: ExperienceDraft) -> Result<Experience, ContentRepositoryError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: ExperienceDraft,
    ) -> Result<Experience, ContentRepositoryError> {
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

fn model_to_domain(model: experiences::Model) -> Experience {
    Experience {
        id: model.id,
        role: model.role,
        company: model.company,
        location: model.location,
        start_date: model.start_date,
        end_date: model.end_date,
        description: model.description,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn map_db_err(err: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_current_position_has_no_end_date() {
        let row = experiences::Model {
            id: Uuid::new_v4(),
            role: "Staff Engineer".to_string(),
            company: "Acme".to_string(),
            location: None,
            start_date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            end_date: None,
            description: "Platform team".to_string(),
            created_at: Utc::now().fixed_offset(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()]])
            .into_connection();

        let found = ExperienceRepositoryPostgres::new(Arc::new(db))
            .find(row.id)
            .await
            .unwrap();

        assert_eq!(found.role, "Staff Engineer");
        assert!(found.end_date.is_none());
    }
}
