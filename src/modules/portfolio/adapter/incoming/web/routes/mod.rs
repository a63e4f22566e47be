mod admin_content;
mod admin_profile;
mod portfolio_page;
mod upload_certification_document;
mod upload_errors;

pub use admin_content::{configure_admin_content, AdminContent};
pub use admin_profile::*;
pub use portfolio_page::{portfolio_page_handler, render_portfolio_page};
pub use upload_certification_document::*;
