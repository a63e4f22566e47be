use async_trait::async_trait;

use crate::portfolio::application::domain::entities::PortfolioPage;
use crate::portfolio::application::ports::{
    incoming::use_cases::{GetPortfolioPageError, GetPortfolioPageUseCase},
    outgoing::PortfolioQuery,
};

#[derive(Debug, Clone)]
pub struct GetPortfolioPageService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetPortfolioPageService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPortfolioPageUseCase for GetPortfolioPageService<Q>
where
    Q: PortfolioQuery + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioPage, GetPortfolioPageError> {
        let snapshot = self
            .query
            .load_snapshot()
            .await
            .map_err(|e| GetPortfolioPageError::QueryFailed(e.to_string()))?;

        snapshot
            .into_page()
            .ok_or(GetPortfolioPageError::ProfileMissing)
    }
}
