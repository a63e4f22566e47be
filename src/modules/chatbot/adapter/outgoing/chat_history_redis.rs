use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::chatbot::application::domain::entities::ChatHistory;
use crate::chatbot::application::ports::outgoing::{ChatHistoryStore, ChatHistoryStoreError};

/// Session history as a JSON array under a key that expires after the TTL.
///
/// ```text
/// chat:history:{session_key} -> [{"question": "...", "answer": "..."}, ...]
/// ```
#[derive(Clone)]
pub struct ChatHistoryRedis {
    pool: Arc<Pool>,
    ttl_secs: u64,
}

impl ChatHistoryRedis {
    pub fn new(pool: Arc<Pool>, ttl_secs: u64) -> Self {
        Self { pool, ttl_secs }
    }

    fn key(session_key: &str) -> String {
        format!("chat:history:{session_key}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, ChatHistoryStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| ChatHistoryStoreError::Backend(format!("Pool error: {e}")))
    }
}

#[async_trait]
impl ChatHistoryStore for ChatHistoryRedis {
    async fn load(&self, session_key: &str) -> Result<ChatHistory, ChatHistoryStoreError> {
        let mut conn = self.get_conn().await?;

        let raw: Option<String> = conn
            .get(Self::key(session_key))
            .await
            .map_err(|e| ChatHistoryStoreError::Backend(e.to_string()))?;

        match raw {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| ChatHistoryStoreError::Corrupt(e.to_string())),
            None => Ok(ChatHistory::default()),
        }
    }

    async fn save(&self, session_key: &str, history: &ChatHistory) -> Result<(), ChatHistoryStoreError> {
        let json = serde_json::to_string(history)
            .map_err(|e| ChatHistoryStoreError::Corrupt(e.to_string()))?;

        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(Self::key(session_key), json, self.ttl_secs)
            .await
            .map_err(|e| ChatHistoryStoreError::Backend(e.to_string()))
    }
}
