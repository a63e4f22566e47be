pub mod chat_logs;
