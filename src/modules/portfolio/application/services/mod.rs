mod get_portfolio_page_service;
mod manage_content_service;
mod manage_profile_service;
mod upload_certification_document_service;

pub use get_portfolio_page_service::GetPortfolioPageService;
pub use manage_content_service::ManageContentService;
pub use manage_profile_service::ManageProfileService;
pub use upload_certification_document_service::UploadCertificationDocumentService;
