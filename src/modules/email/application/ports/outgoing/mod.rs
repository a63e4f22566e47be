pub mod contact_notifier;
pub mod email_sender;
