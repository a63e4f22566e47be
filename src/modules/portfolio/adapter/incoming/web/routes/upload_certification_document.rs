use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use super::admin_profile::UPLOAD_FIELD;
use super::upload_errors::{multipart_error, policy_error};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::media::application::domain::{UploadKind, UploadPolicy};
use crate::portfolio::application::domain::entities::Certification;
use crate::portfolio::application::ports::incoming::use_cases::UploadCertificationDocumentError;
use crate::shared::api::ApiResponse;
use crate::shared::multipart::read_file_field;
use crate::AppState;

/// Upload a certification document
///
/// Multipart body with a `file` field (pdf, jpg, jpeg, png or webp, up to 10 MB).
/// Image documents get a PNG thumbnail. Earlier files are deleted.
#[utoipa::path(
    post,
    path = "/admin/api/certifications/{id}/document",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Certification id")),
    responses(
        (status = 200, description = "Document stored", body = inline(SuccessResponse<Certification>)),
        (status = 400, description = "Missing or invalid file", body = ErrorResponse),
        (status = 404, description = "Certification not found", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
    )
)]
#[post("/admin/api/certifications/{id}/document")]
pub async fn upload_certification_document_handler(
    admin: AdminUser,
    path: web::Path<Uuid>,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let certification_id = path.into_inner();

    let limit = UploadPolicy::for_kind(UploadKind::CertificationDocument).max_file_size_bytes;
    let file = match read_file_field(payload, UPLOAD_FIELD, limit).await {
        Ok(file) => file,
        Err(e) => return multipart_error(e),
    };

    match data
        .portfolio
        .certification_documents
        .execute(certification_id, file)
        .await
    {
        Ok(certification) => {
            info!(admin = %admin.username, certification_id = %certification_id, "Certification document replaced");
            ApiResponse::success(certification)
        }

        Err(UploadCertificationDocumentError::NotFound) => ApiResponse::not_found(
            "CERTIFICATION_NOT_FOUND",
            "The certification does not exist",
        ),

        Err(UploadCertificationDocumentError::InvalidUpload(e)) => policy_error(e),

        Err(UploadCertificationDocumentError::StorageFailed(ref e)) => {
            error!(error = %e, "Failed to store certification document");
            ApiResponse::internal_error()
        }

        Err(UploadCertificationDocumentError::RepositoryError(ref e)) => {
            error!(error = %e, "Certification repository failure");
            ApiResponse::internal_error()
        }
    }
}
