use std::sync::Arc;

use crate::chatbot::application::ports::incoming::use_cases::{
    ListChatLogsUseCase, RelayChatUseCase,
};
use crate::chatbot::application::ports::outgoing::RateLimiter;

#[derive(Clone)]
pub struct ChatbotUseCases {
    pub relay: Arc<dyn RelayChatUseCase + Send + Sync>,
    pub list_logs: Arc<dyn ListChatLogsUseCase + Send + Sync>,
    pub rate_limiter: Arc<dyn RateLimiter + Send + Sync>,
}
