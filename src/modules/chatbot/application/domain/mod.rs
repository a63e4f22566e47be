pub mod entities;
pub mod grounding;
pub mod prompt;
