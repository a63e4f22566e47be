pub mod api;
pub mod client_ip;
pub mod flash;
pub mod multipart;
pub mod pagination;
pub mod templates;
