use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{LoginAdminError, LoginAdminRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use utoipa::ToSchema;

/// Admin login request
#[derive(Deserialize, Serialize, ToSchema)]
pub struct LoginAdminRequestDto {
    #[schema(example = "admin")]
    pub username: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginAdminResponseDto {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,

    #[schema(example = "Bearer")]
    token_type: &'static str,

    /// Lifetime in seconds
    #[schema(example = 1800)]
    expires_in: i64,
}

/// Admin login
///
/// Exchanges the configured admin credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/admin/api/login",
    tag = "auth",
    request_body = LoginAdminRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginAdminResponseDto>)),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/admin/api/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginAdminRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match LoginAdminRequest::new(dto.username, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    let username = request.username().to_string();

    match data.login_admin.execute(request).await {
        Ok(response) => {
            info!(username = %username, "Admin logged in");

            ApiResponse::success(LoginAdminResponseDto {
                access_token: response.access_token,
                token_type: "Bearer",
                expires_in: response.expires_in,
            })
        }

        Err(LoginAdminError::InvalidCredentials) => {
            warn!(username = %username, "Admin login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(LoginAdminError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginAdminError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
