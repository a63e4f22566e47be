use actix_web::HttpResponse;

use crate::media::application::domain::UploadPolicyError;
use crate::shared::api::ApiResponse;
use crate::shared::multipart::MultipartReadError;

pub(super) fn multipart_error(err: MultipartReadError) -> HttpResponse {
    match err {
        MultipartReadError::MissingField(field) => ApiResponse::bad_request(
            "MISSING_FILE",
            &format!("Multipart field '{field}' is required"),
        ),
        MultipartReadError::TooLarge(limit) => ApiResponse::payload_too_large(
            "FILE_TOO_LARGE",
            &format!("File exceeds the {limit} byte limit"),
        ),
        MultipartReadError::Malformed(e) => ApiResponse::bad_request("INVALID_MULTIPART", &e),
    }
}

pub(super) fn policy_error(err: UploadPolicyError) -> HttpResponse {
    match err {
        UploadPolicyError::TooLarge(_) => {
            ApiResponse::payload_too_large("FILE_TOO_LARGE", &err.to_string())
        }
        UploadPolicyError::UnsupportedExtension(_) => {
            ApiResponse::bad_request("INVALID_FILE_EXTENSION", &err.to_string())
        }
        _ => ApiResponse::bad_request("INVALID_FILE", &err.to_string()),
    }
}
