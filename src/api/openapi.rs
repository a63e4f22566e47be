use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{LoginAdminRequestDto, LoginAdminResponseDto};
use crate::chatbot::adapter::incoming::web::routes::ChatMessageForm;
use crate::chatbot::application::domain::entities::ChatLog;
use crate::contact::adapter::incoming::web::routes::ContactAjaxResponse;
use crate::contact::application::domain::entities::ContactMessage;
use crate::contact::application::ports::incoming::use_cases::ContactFormInput;
use crate::portfolio::application::domain::drafts::{
    CertificationDraft, EducationDraft, ExperienceDraft, LinkDraft, ProfileDraft, ProjectDraft,
    SkillDraft,
};
use crate::portfolio::application::domain::entities::{
    Certification, Education, Experience, OtherLink, Profile, Project, Skill, SkillCategory,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Public contact and chatbot endpoints plus the admin content API",
    ),
    paths(
        // Public endpoints
        crate::contact::adapter::incoming::web::routes::submit_contact_handler,
        crate::chatbot::adapter::incoming::web::routes::chatbot_response_handler,

        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin_handler,

        // Admin endpoints
        crate::portfolio::adapter::incoming::web::routes::get_profile_handler,
        crate::portfolio::adapter::incoming::web::routes::upsert_profile_handler,
        crate::portfolio::adapter::incoming::web::routes::upload_profile_image_handler,
        crate::portfolio::adapter::incoming::web::routes::upload_resume_handler,
        crate::portfolio::adapter::incoming::web::routes::upload_certification_document_handler,
        crate::contact::adapter::incoming::web::routes::list_contact_messages_handler,
        crate::chatbot::adapter::incoming::web::routes::list_chat_logs_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Public DTOs
            ContactFormInput,
            ContactAjaxResponse,
            ChatMessageForm,

            // Auth DTOs
            LoginAdminRequestDto,
            LoginAdminResponseDto,

            // Content
            Profile,
            ProfileDraft,
            Project,
            ProjectDraft,
            Skill,
            SkillCategory,
            SkillDraft,
            Experience,
            ExperienceDraft,
            Education,
            EducationDraft,
            Certification,
            CertificationDraft,
            OtherLink,
            LinkDraft,

            // Read-only records
            ContactMessage,
            ChatLog,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "contact", description = "Public contact form"),
        (name = "chatbot", description = "Streaming portfolio assistant"),
        (name = "auth", description = "Admin authentication"),
        (name = "admin", description = "Profile, uploads and read-only records"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /admin/api/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_public_and_admin_paths() {
        let doc = ApiDoc::openapi();

        for path in [
            "/",
            "/chatbot-response/",
            "/admin/api/login",
            "/admin/api/profile",
            "/admin/api/profile/image",
            "/admin/api/certifications/{id}/document",
            "/admin/api/chat-logs",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn test_error_schema_uses_site_codes() {
        let doc = ApiDoc::openapi();
        let schema = serde_json::to_value(&doc.components.unwrap().schemas["ErrorDetail"]).unwrap();

        assert!(schema["properties"]["code"]
            .to_string()
            .contains("VALIDATION_ERROR"));
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();

        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
