use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::portfolio::adapter::outgoing::sea_orm_entity::educations::{
    self, ActiveModel, Column, Entity,
};
use crate::portfolio::application::domain::drafts::{normalize_optional, EducationDraft};
use crate::portfolio::application::domain::entities::Education;
use crate::portfolio::application::ports::outgoing::{ContentRepository, ContentRepositoryError};

#[derive(Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn draft_to_active(draft: EducationDraft) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        degree: Set(draft.degree.trim().to_string()),
        institution: Set(draft.institution.trim().to_string()),
        admission_year: Set(draft.admission_year),
        passing_year: Set(draft.passing_year),
        grade: Set(normalize_optional(draft.grade)),
        created_at: NotSet,
    }
}

#[async_trait]
impl ContentRepository<Education> for EducationRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Education>, ContentRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::PassingYear)
            .order_by_desc(Column::AdmissionYear)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_domain).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Education, ContentRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_domain)
            .ok_or(ContentRepositoryError::NotFound)
    }

    async fn create(&self, draft: EducationDraft) -> Result<Education, ContentRepositoryError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());
        model.created_at = Set(Utc::now().fixed_offset());

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: EducationDraft,
    ) -> Result<Education, ContentRepositoryError> {
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

fn model_to_domain(model: educations::Model) -> Education {
    Education {
        id: model.id,
        degree: model.degree,
        institution: model.institution,
        admission_year: model.admission_year,
        passing_year: model.passing_year,
        grade: model.grade,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn map_db_err(err: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(err.to_string())
}
