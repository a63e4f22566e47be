use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    Order, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::portfolio::adapter::outgoing::sea_orm_entity::certifications::{
    self, ActiveModel, Column, Entity,
};
use crate::portfolio::application::domain::drafts::{normalize_optional, CertificationDraft};
use crate::portfolio::application::domain::entities::Certification;
use crate::portfolio::application::ports::outgoing::{
    CertificationDocumentRepository, ContentRepository, ContentRepositoryError,
};

#[derive(Clone)]
pub struct CertificationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CertificationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn update_where_id(
        &self,
        id: Uuid,
        model: ActiveModel,
    ) -> Result<Certification, ContentRepositoryError> {
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
            .ok_or(ContentRepositoryError::NotFound)
    }
}

/// Leaves document columns untouched; those change only through uploads.
fn draft_to_active(draft: CertificationDraft) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(draft.name.trim().to_string()),
        issuer: Set(draft.issuer.trim().to_string()),
        issue_date: Set(draft.issue_date),
        credential_url: Set(normalize_optional(draft.credential_url)),
        document: NotSet,
        thumbnail: NotSet,
        created_at: NotSet,
    }
}

#[async_trait]
impl ContentRepository<Certification> for CertificationRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Certification>, ContentRepositoryError> {
        let rows = Entity::find()
            .order_by_with_nulls(Column::IssueDate, Order::Desc, NullOrdering::Last)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_domain).collect())
    }

    async fn find(&self, id: Uuid) -> Result<Certification, ContentRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_domain)
            .ok_or(ContentRepositoryError::NotFound)
    }

    async fn create(
        &self,
        draft: CertificationDraft,
    ) -> Result<Certification, ContentRepositoryError> {
        let mut model = draft_to_active(draft);
        model.id = Set(Uuid::new_v4());
        model.document = Set(None);
        model.thumbnail = Set(None);
        model.created_at = Set(Utc::now().fixed_offset());

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(saved))
    }

    async fn update(
        &self,
        id: Uuid,
        draft: CertificationDraft,
    ) -> Result<Certification, ContentRepositoryError> {
        self.update_where_id(id, draft_to_active(draft)).await
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

#[async_trait]
impl CertificationDocumentRepository for CertificationRepositoryPostgres {
    async fn find(&self, id: Uuid) -> Result<Certification, ContentRepositoryError> {
        ContentRepository::<Certification>::find(self, id).await
    }

    async fn set_document(
        &self,
        id: Uuid,
        document: &str,
        thumbnail: Option<&str>,
    ) -> Result<Certification, ContentRepositoryError> {
        let model = ActiveModel {
            document: Set(Some(document.to_string())),
            thumbnail: Set(thumbnail.map(str::to_string)),
            ..Default::default()
        };

        self.update_where_id(id, model).await
    }
}

fn model_to_domain(model: certifications::Model) -> Certification {
    Certification {
        id: model.id,
        name: model.name,
        issuer: model.issuer,
        issue_date: model.issue_date,
        credential_url: model.credential_url,
        document: model.document,
        thumbnail: model.thumbnail,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn map_db_err(err: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::DatabaseError(err.to_string())
}
