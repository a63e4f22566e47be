use serde::Serialize;
use utoipa::ToSchema;

/// Body of every successful admin API and AJAX response.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Body of every failed admin API, chatbot or upload request.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code such as `VALIDATION_ERROR`, `INVALID_TOKEN` or `RATE_LIMITED`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    #[schema(example = "email: must be a valid email address")]
    pub message: String,
}
