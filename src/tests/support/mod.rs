pub mod app_state_builder;
pub mod auth;
pub mod multipart;
pub mod stubs;
