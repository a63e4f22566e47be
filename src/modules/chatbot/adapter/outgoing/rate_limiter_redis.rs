use async_trait::async_trait;
use chrono::Utc;
use deadpool_redis::Pool;
use std::sync::Arc;

use crate::chatbot::application::ports::outgoing::{
    RateLimitDecision, RateLimiter, RateLimiterError,
};

const WINDOW_SECS: u64 = 60;

/// Fixed one-minute windows counted with `INCR`.
///
/// ```text
/// ratelimit:chat:{client}:{window} -> count   (expires with the window)
/// ```
#[derive(Clone)]
pub struct RateLimiterRedis {
    pool: Arc<Pool>,
    per_minute: u32,
}

impl RateLimiterRedis {
    pub fn new(pool: Arc<Pool>, per_minute: u32) -> Self {
        Self { pool, per_minute }
    }

    fn key(client_key: &str, window: u64) -> String {
        format!("ratelimit:chat:{client_key}:{window}")
    }
}

/// Window index and seconds left in it.
fn window_at(unix_secs: u64) -> (u64, u64) {
    (unix_secs / WINDOW_SECS, WINDOW_SECS - unix_secs % WINDOW_SECS)
}

fn decide(count: u64, limit: u32, retry_after_secs: u64) -> RateLimitDecision {
    RateLimitDecision {
        allowed: count <= u64::from(limit),
        limit,
        retry_after_secs,
    }
}

#[async_trait]
impl RateLimiter for RateLimiterRedis {
    async fn hit(&self, client_key: &str) -> Result<RateLimitDecision, RateLimiterError> {
        let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
        let (window, remaining) = window_at(now);
        let key = Self::key(client_key, window);

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| RateLimiterError::Backend(format!("Pool error: {e}")))?;

        let (count,): (u64,) = deadpool_redis::redis::pipe()
            .atomic()
            .cmd("INCR")
            .arg(&key)
            .cmd("EXPIRE")
            .arg(&key)
            .arg(WINDOW_SECS)
            .ignore()
            .query_async(&mut *conn)
            .await
            .map_err(|e| RateLimiterError::Backend(e.to_string()))?;

        Ok(decide(count, self.per_minute, remaining))
    }
}
