use async_trait::async_trait;

use crate::portfolio::application::domain::entities::PortfolioPage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioPageError {
    #[error("No profile has been set up")]
    ProfileMissing,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetPortfolioPageUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioPage, GetPortfolioPageError>;
}
