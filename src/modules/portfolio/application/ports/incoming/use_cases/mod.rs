mod get_portfolio_page;
mod manage_content;
mod manage_profile;
mod upload_certification_document;

pub use get_portfolio_page::*;
pub use manage_content::*;
pub use manage_profile::*;
pub use upload_certification_document::*;
