use async_trait::async_trait;

use crate::portfolio::application::domain::entities::PortfolioSnapshot;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PortfolioQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side shared by the page and the chatbot grounding context.
#[async_trait]
pub trait PortfolioQuery: Send + Sync {
    async fn load_snapshot(&self) -> Result<PortfolioSnapshot, PortfolioQueryError>;
}
