pub mod chat_history_redis;
pub mod chat_log_repository_postgres;
pub mod gemini_client;
pub mod gemini_model_catalog;
pub mod rate_limiter_redis;
pub mod sea_orm_entity;

pub use chat_history_redis::ChatHistoryRedis;
pub use chat_log_repository_postgres::ChatLogRepositoryPostgres;
pub use gemini_client::GeminiClient;
pub use gemini_model_catalog::GeminiModelCatalog;
pub use rate_limiter_redis::RateLimiterRedis;
