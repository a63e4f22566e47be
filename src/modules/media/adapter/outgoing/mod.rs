pub mod image_thumbnail_generator;
#[cfg(test)]
pub mod in_memory_storage;
pub mod local_media_storage;

pub use image_thumbnail_generator::ImageThumbnailGenerator;
pub use local_media_storage::LocalMediaStorage;
