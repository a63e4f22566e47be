use actix_web::{http::header, post, web, HttpRequest, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::contact::application::domain::entities::FieldErrors;
use crate::contact::application::ports::incoming::use_cases::{
    ContactFormInput, SubmitContactCommand, SubmitContactError,
};
use crate::portfolio::adapter::incoming::web::routes::render_portfolio_page;
use crate::shared::flash::Flash;
use crate::AppState;

const CONTACT_ANCHOR: &str = "/#contact";

/// Body returned to script-driven submissions.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactAjaxResponse {
    #[schema(example = "success")]
    pub status: &'static str,

    #[schema(example = "Thank you for your message! I'll get back to you soon.")]
    pub message: String,

    /// Messages keyed by form field, present only for invalid input.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub errors: Option<FieldErrors>,
}

fn is_ajax(req: &HttpRequest) -> bool {
    req.headers()
        .get("X-Requested-With")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
}

fn redirect_with(flash: Flash) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, CONTACT_ANCHOR))
        .cookie(flash.cookie())
        .finish()
}

/// Submit the contact form
///
/// Form-encoded `name`, `email`, `subject`, `message`. Requests carrying
/// `X-Requested-With: XMLHttpRequest` get JSON; others are redirected back to
/// the page with a flash message, or get the page re-rendered with inline
/// errors when the input is invalid.
#[utoipa::path(
    post,
    path = "/",
    tag = "contact",
    request_body(content = ContactFormInput, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Message stored (AJAX)", body = ContactAjaxResponse),
        (status = 303, description = "Message handled, redirect to the contact section"),
        (status = 400, description = "Invalid input (AJAX)", body = ContactAjaxResponse),
        (status = 500, description = "Message could not be stored (AJAX)", body = ContactAjaxResponse),
    )
)]
#[post("/")]
pub async fn submit_contact_handler(
    req: HttpRequest,
    form: web::Form<ContactFormInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let ajax = is_ajax(&req);
    let input = form.into_inner();

    let command = match SubmitContactCommand::new(&input) {
        Ok(command) => command,
        Err(errors) => {
            info!(%errors, ajax, "Contact form rejected");

            if ajax {
                return HttpResponse::BadRequest().json(ContactAjaxResponse {
                    status: "error",
                    message: "Please correct the errors in the form.".to_string(),
                    errors: Some(errors),
                });
            }
            return render_portfolio_page(&data, &input, &errors, None).await;
        }
    };

    match data.contact.submit.execute(command).await {
        Ok(message) => {
            info!(message_id = %message.id, ajax, "Contact form submitted");

            if ajax {
                HttpResponse::Ok().json(ContactAjaxResponse {
                    status: "success",
                    message: Flash::ContactSent.view().message.to_string(),
                    errors: None,
                })
            } else {
                redirect_with(Flash::ContactSent)
            }
        }

        Err(SubmitContactError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to store contact message");

            if ajax {
                HttpResponse::InternalServerError().json(ContactAjaxResponse {
                    status: "error",
                    message: Flash::ContactFailed.view().message.to_string(),
                    errors: None,
                })
            } else {
                redirect_with(Flash::ContactFailed)
            }
        }
    }
}
