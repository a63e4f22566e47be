pub mod certification_document_repository;
pub mod content_repository;
pub mod portfolio_query;
pub mod profile_repository;

pub use certification_document_repository::CertificationDocumentRepository;
pub use content_repository::{ContentRecord, ContentRepository, ContentRepositoryError};
pub use portfolio_query::{PortfolioQuery, PortfolioQueryError};
pub use profile_repository::{ProfileRepository, ProfileRepositoryError};
