mod list_contact_messages;
mod submit_contact;

pub use list_contact_messages::*;
pub use submit_contact::*;
