pub mod chatbot_use_cases;
pub mod domain;
pub mod ports;
pub mod services;

pub use chatbot_use_cases::ChatbotUseCases;
