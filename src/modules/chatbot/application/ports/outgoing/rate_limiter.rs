use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: u32,
    /// Seconds until the current window resets.
    pub retry_after_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateLimiterError {
    #[error("Rate limiter backend error: {0}")]
    Backend(String),
}

/// Fixed-window request counter keyed by client.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    async fn hit(&self, client_key: &str) -> Result<RateLimitDecision, RateLimiterError>;
}
