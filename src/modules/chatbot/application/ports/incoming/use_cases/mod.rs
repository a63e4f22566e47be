mod list_chat_logs;
mod relay_chat;

pub use list_chat_logs::*;
pub use relay_chat::*;
