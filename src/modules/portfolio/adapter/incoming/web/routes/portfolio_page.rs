use actix_web::{get, http::StatusCode, web, HttpRequest, HttpResponse, Responder};
use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::{error, warn};

use crate::contact::application::domain::entities::FieldErrors;
use crate::contact::application::ports::incoming::use_cases::ContactFormInput;
use crate::portfolio::application::domain::entities::PortfolioPage;
use crate::portfolio::application::ports::incoming::use_cases::GetPortfolioPageError;
use crate::shared::flash::{clear_flash_cookie, take_flash, Flash, FlashView};
use crate::shared::templates::{ERROR_PAGE, PORTFOLIO_PAGE};
use crate::AppState;

#[derive(Serialize)]
struct PortfolioPageContext<'a> {
    site_name: &'a str,
    media_url: &'a str,
    page: &'a PortfolioPage,
    form: &'a ContactFormInput,
    errors: &'a FieldErrors,
    flash: Option<FlashView>,
    year: i32,
}

#[derive(Serialize)]
struct ErrorPageContext<'a> {
    site_name: &'a str,
    title: &'a str,
    message: &'a str,
}

/// Renders the portfolio with the given contact form state.
///
/// A missing profile renders the error page instead, still with 200.
pub async fn render_portfolio_page(
    data: &AppState,
    form: &ContactFormInput,
    errors: &FieldErrors,
    flash: Option<Flash>,
) -> HttpResponse {
    match data.portfolio.page.execute().await {
        Ok(page) => {
            let context = PortfolioPageContext {
                site_name: &data.site.site_name,
                media_url: &data.site.media_url,
                page: &page,
                form,
                errors,
                flash: flash.map(Flash::view),
                year: Utc::now().year(),
            };
            data.templates.html(StatusCode::OK, PORTFOLIO_PAGE, &context)
        }

        Err(GetPortfolioPageError::ProfileMissing) => {
            warn!("Portfolio requested before a profile was set up");
            render_error_page(
                data,
                StatusCode::OK,
                "Profile not found",
                "This portfolio has not been set up yet. Please check back soon.",
            )
        }

        Err(GetPortfolioPageError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to load portfolio");
            render_error_page(
                data,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong",
                "The page could not be loaded. Please try again later.",
            )
        }
    }
}

fn render_error_page(data: &AppState, status: StatusCode, title: &str, message: &str) -> HttpResponse {
    let context = ErrorPageContext {
        site_name: &data.site.site_name,
        title,
        message,
    };
    data.templates.html(status, ERROR_PAGE, &context)
}

#[get("/")]
pub async fn portfolio_page_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let flash = take_flash(&req);

    let mut response = render_portfolio_page(
        &data,
        &ContactFormInput::default(),
        &FieldErrors::default(),
        flash,
    )
    .await;

    if flash.is_some() {
        if let Err(e) = response.add_cookie(&clear_flash_cookie()) {
            warn!(error = %e, "Failed to clear flash cookie");
        }
    }

    response
}
