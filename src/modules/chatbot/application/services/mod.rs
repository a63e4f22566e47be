mod list_chat_logs_service;
mod relay_chat_service;

pub use list_chat_logs_service::ListChatLogsService;
pub use relay_chat_service::RelayChatService;
