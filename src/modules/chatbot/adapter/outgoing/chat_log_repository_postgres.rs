use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    ActiveModelTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::chatbot::adapter::outgoing::sea_orm_entity::chat_logs::{
    self, ActiveModel, Column, Entity,
};
use crate::chatbot::application::domain::entities::ChatLog;
use crate::chatbot::application::ports::outgoing::{
    ChatLogRepository, ChatLogRepositoryError, NewChatLog,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone)]
pub struct ChatLogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ChatLogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// `%` and `_` in the search are matched literally.
fn like_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait]
impl ChatLogRepository for ChatLogRepositoryPostgres {
    async fn save(&self, log: NewChatLog) -> Result<ChatLog, ChatLogRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            session_key: Set(log.session_key),
            user_query: Set(log.user_query),
            ai_response: Set(log.ai_response),
            model_used: Set(log.model_used),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let saved = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_domain(saved))
    }

    async fn list(
        &self,
        page: PageRequest,
        search: Option<&str>,
    ) -> Result<PageResult<ChatLog>, ChatLogRepositoryError> {
        let mut query = Entity::find().order_by_desc(Column::CreatedAt);

        if let Some(search) = search {
            let pattern = like_pattern(search);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::UserQuery).ilike(pattern.clone()))
                    .add(Expr::col(Column::AiResponse).ilike(pattern)),
            );
        }

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: rows.into_iter().map(model_to_domain).collect(),
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}

fn model_to_domain(model: chat_logs::Model) -> ChatLog {
    ChatLog {
        id: model.id,
        session_key: model.session_key,
        user_query: model.user_query,
        ai_response: model.ai_response,
        model_used: model.model_used,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn map_db_err(err: DbErr) -> ChatLogRepositoryError {
    ChatLogRepositoryError::DatabaseError(err.to_string())
}
