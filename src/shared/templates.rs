// src/shared/templates.rs

use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use tera::{Context, Tera};

pub const PORTFOLIO_PAGE: &str = "portfolio.html";
pub const ERROR_PAGE: &str = "error.html";
pub const CONTACT_NOTIFICATION_EMAIL: &str = "emails/contact_notification.html";
pub const CONTACT_ACKNOWLEDGEMENT_EMAIL: &str = "emails/contact_acknowledgement.html";

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Failed to load templates: {0}")]
    Load(String),

    #[error("Failed to build template context: {0}")]
    Context(String),

    #[error("Failed to render template {name}: {message}")]
    Render { name: String, message: String },
}

/// Tera engine with every template compiled into the binary.
#[derive(Clone)]
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../../templates/base.html")),
            (PORTFOLIO_PAGE, include_str!("../../templates/portfolio.html")),
            (ERROR_PAGE, include_str!("../../templates/error.html")),
            (
                CONTACT_NOTIFICATION_EMAIL,
                include_str!("../../templates/emails/contact_notification.html"),
            ),
            (
                CONTACT_ACKNOWLEDGEMENT_EMAIL,
                include_str!("../../templates/emails/contact_acknowledgement.html"),
            ),
        ])
        .map_err(|e| TemplateError::Load(e.to_string()))?;

        Ok(Self { tera })
    }

    pub fn render<C: Serialize>(&self, name: &str, context: &C) -> Result<String, TemplateError> {
        let context =
            Context::from_serialize(context).map_err(|e| TemplateError::Context(e.to_string()))?;

        self.tera
            .render(name, &context)
            .map_err(|e| TemplateError::Render {
                name: name.to_string(),
                message: render_error_chain(&e),
            })
    }

    /// Renders into an HTML response; falls back to a bare 500 when the template itself fails.
    pub fn html<C: Serialize>(&self, status: StatusCode, name: &str, context: &C) -> HttpResponse {
        match self.render(name, context) {
            Ok(body) => HttpResponse::build(status)
                .content_type("text/html; charset=utf-8")
                .body(body),
            Err(e) => {
                tracing::error!("{}", e);
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("Internal Server Error")
            }
        }
    }
}

// Tera nests the useful message in the source chain.
fn render_error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_all_templates_compile() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_error_page_renders_message() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer
            .render(
                ERROR_PAGE,
                &json!({ "site_name": "Portfolio", "title": "Oops", "message": "Profile not set up" }),
            )
            .unwrap();

        assert!(html.contains("Profile not set up"));
    }

    #[test]
    fn test_unknown_template_is_render_error() {
        let renderer = TemplateRenderer::new().unwrap();
        let result = renderer.render("missing.html", &json!({}));

        assert!(matches!(result, Err(TemplateError::Render { .. })));
    }
}
