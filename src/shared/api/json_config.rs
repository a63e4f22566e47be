// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{FormConfig, JsonConfig};

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

/// Form bodies on the public pages are small; anything larger is rejected early.
pub fn custom_form_config() -> FormConfig {
    FormConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("INVALID_FORM", &message),
            )
            .into()
        })
}
