pub mod drafts;
pub mod entities;
