pub mod chat_history_store;
pub mod chat_log_repository;
pub mod language_model;
pub mod model_catalog;
pub mod rate_limiter;

pub use chat_history_store::{ChatHistoryStore, ChatHistoryStoreError};
pub use chat_log_repository::{ChatLogRepository, ChatLogRepositoryError, NewChatLog};
pub use language_model::{LanguageModel, LanguageModelError, TextStream};
pub use model_catalog::ModelCatalog;
pub use rate_limiter::{RateLimitDecision, RateLimiter, RateLimiterError};
