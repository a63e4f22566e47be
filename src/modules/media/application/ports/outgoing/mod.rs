pub mod media_storage;
pub mod thumbnail_generator;

pub use media_storage::{MediaStorage, MediaStorageError};
pub use thumbnail_generator::{ThumbnailError, ThumbnailGenerator};
