use actix_multipart::Multipart;
use actix_web::{get, post, put, web, HttpResponse, Responder};
use tracing::{error, info};

use super::upload_errors::{multipart_error, policy_error};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::media::application::domain::{UploadKind, UploadPolicy};
use crate::portfolio::application::domain::drafts::ProfileDraft;
use crate::portfolio::application::domain::entities::Profile;
use crate::portfolio::application::ports::incoming::use_cases::ManageProfileError;
use crate::shared::api::ApiResponse;
use crate::shared::multipart::read_file_field;
use crate::AppState;

pub const UPLOAD_FIELD: &str = "file";

fn profile_error(err: ManageProfileError) -> HttpResponse {
    match err {
        ManageProfileError::Validation(e) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }
        ManageProfileError::NotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "No profile has been set up yet")
        }
        ManageProfileError::InvalidUpload(e) => policy_error(e),
        ManageProfileError::StorageFailed(ref e) => {
            error!(error = %e, "Failed to store profile upload");
            ApiResponse::internal_error()
        }
        ManageProfileError::RepositoryError(ref e) => {
            error!(error = %e, "Profile repository failure");
            ApiResponse::internal_error()
        }
    }
}

/// Get the site profile
#[utoipa::path(
    get,
    path = "/admin/api/profile",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current profile", body = inline(SuccessResponse<Profile>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No profile yet", body = ErrorResponse),
    )
)]
#[get("/admin/api/profile")]
pub async fn get_profile_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.profile.get().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => profile_error(e),
    }
}

/// Create or update the site profile
#[utoipa::path(
    put,
    path = "/admin/api/profile",
    tag = "admin",
    security(("bearer_auth" = [])),
    request_body = ProfileDraft,
    responses(
        (status = 200, description = "Profile saved", body = inline(SuccessResponse<Profile>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
#[put("/admin/api/profile")]
pub async fn upsert_profile_handler(
    admin: AdminUser,
    payload: web::Json<ProfileDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.portfolio.profile.upsert(payload.into_inner()).await {
        Ok(profile) => {
            info!(admin = %admin.username, "Admin saved profile");
            ApiResponse::success(profile)
        }
        Err(e) => profile_error(e),
    }
}

/// Replace the profile image
///
/// Multipart body with a `file` field (jpg, jpeg, png or webp, up to 5 MB).
/// The previous image is deleted unless it is the default asset.
#[utoipa::path(
    post,
    path = "/admin/api/profile/image",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Image replaced", body = inline(SuccessResponse<Profile>)),
        (status = 400, description = "Missing or invalid file", body = ErrorResponse),
        (status = 404, description = "No profile yet", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
    )
)]
#[post("/admin/api/profile/image")]
pub async fn upload_profile_image_handler(
    _admin: AdminUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let limit = UploadPolicy::for_kind(UploadKind::ProfileImage).max_file_size_bytes;
    let file = match read_file_field(payload, UPLOAD_FIELD, limit).await {
        Ok(file) => file,
        Err(e) => return multipart_error(e),
    };

    match data.portfolio.profile.replace_image(file).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => profile_error(e),
    }
}

/// Replace the resume
///
/// Multipart body with a `file` field (pdf, doc or docx, up to 10 MB).
#[utoipa::path(
    post,
    path = "/admin/api/profile/resume",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Resume replaced", body = inline(SuccessResponse<Profile>)),
        (status = 400, description = "Missing or invalid file", body = ErrorResponse),
        (status = 404, description = "No profile yet", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
    )
)]
#[post("/admin/api/profile/resume")]
pub async fn upload_resume_handler(
    _admin: AdminUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let limit = UploadPolicy::for_kind(UploadKind::Resume).max_file_size_bytes;
    let file = match read_file_field(payload, UPLOAD_FIELD, limit).await {
        Ok(file) => file,
        Err(e) => return multipart_error(e),
    };

    match data.portfolio.profile.replace_resume(file).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(e) => profile_error(e),
    }
}
