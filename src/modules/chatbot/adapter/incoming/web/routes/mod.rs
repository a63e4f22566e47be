mod chatbot_response;
mod list_chat_logs;

pub use chatbot_response::*;
pub use list_chat_logs::*;
