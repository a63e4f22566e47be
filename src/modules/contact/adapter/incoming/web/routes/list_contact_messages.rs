use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::contact::application::domain::entities::ContactMessage;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageQuery, PageResult};
use crate::AppState;

/// List contact messages
///
/// Newest first.
#[utoipa::path(
    get,
    path = "/admin/api/contact-messages",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(PageQuery),
    responses(
        (status = 200, description = "One page of messages", body = inline(SuccessResponse<PageResult<ContactMessage>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/admin/api/contact-messages")]
pub async fn list_contact_messages_handler(
    _admin: AdminUser,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.list_messages.execute(query.into_inner().into()).await {
        Ok(page) => ApiResponse::success(page),
        Err(e) => {
            error!(error = %e, "Failed to list contact messages");
            ApiResponse::internal_error()
        }
    }
}
