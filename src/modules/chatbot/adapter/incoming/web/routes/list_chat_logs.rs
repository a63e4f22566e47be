use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::chatbot::application::domain::entities::ChatLog;
use crate::chatbot::application::ports::incoming::use_cases::ListChatLogsQuery;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageQuery, PageResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ChatLogSearch {
    /// Case-insensitive match on the question or the answer.
    pub search: Option<String>,
}

/// List chatbot exchanges
///
/// Newest first.
#[utoipa::path(
    get,
    path = "/admin/api/chat-logs",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(PageQuery, ChatLogSearch),
    responses(
        (status = 200, description = "One page of chat logs", body = inline(SuccessResponse<PageResult<ChatLog>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/admin/api/chat-logs")]
pub async fn list_chat_logs_handler(
    _admin: AdminUser,
    page: web::Query<PageQuery>,
    search: web::Query<ChatLogSearch>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = ListChatLogsQuery {
        page: page.into_inner().into(),
        search: search.into_inner().search,
    };

    match data.chatbot.list_logs.execute(query).await {
        Ok(page) => ApiResponse::success(page),
        Err(e) => {
            error!(error = %e, "Failed to list chat logs");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::application::ports::incoming::use_cases::{
        ListChatLogsError, ListChatLogsUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth::{bearer, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingList {
        seen: Arc<Mutex<Option<(u32, Option<String>)>>>,
        fail: bool,
    }

    #[async_trait]
    impl ListChatLogsUseCase for RecordingList {
        async fn execute(
            &self,
            query: ListChatLogsQuery,
        ) -> Result<PageResult<ChatLog>, ListChatLogsError> {
            *self.seen.lock().unwrap() = Some((query.page.page, query.search.clone()));
            if self.fail {
                return Err(ListChatLogsError::RepositoryError("down".to_string()));
            }
            Ok(PageResult {
                items: Vec::new(),
                page: query.page.page,
                per_page: query.page.per_page,
                total: 0,
            })
        }
    }

    async fn get(list: RecordingList, uri: &str, auth: bool) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default().with_list_chat_logs(list).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(list_chat_logs_handler),
        )
        .await;

        let mut req = test::TestRequest::get().uri(uri);
        if auth {
            req = req.insert_header(("Authorization", bearer()));
        }
        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn test_passes_page_and_search() {
        let list = RecordingList::default();
        let resp = get(list.clone(), "/admin/api/chat-logs?page=3&search=rust", true).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["page"], 3);
        assert_eq!(
            *list.seen.lock().unwrap(),
            Some((3, Some("rust".to_string())))
        );
    }

    #[actix_web::test]
    async fn test_requires_admin_token() {
        let resp = get(RecordingList::default(), "/admin/api/chat-logs", false).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_repository_failure_is_500() {
        let list = RecordingList {
            fail: true,
            ..Default::default()
        };
        let resp = get(list, "/admin/api/chat-logs", true).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
