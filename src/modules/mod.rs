pub mod auth;
pub mod chatbot;
pub mod contact;
pub mod email;
pub mod media;
pub mod portfolio;
