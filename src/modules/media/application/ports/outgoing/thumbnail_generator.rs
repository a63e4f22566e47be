use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ThumbnailError {
    #[error("Could not decode image: {0}")]
    Decode(String),

    #[error("Could not encode thumbnail: {0}")]
    Encode(String),

    #[error("Thumbnail task failed: {0}")]
    Task(String),
}

#[async_trait]
pub trait ThumbnailGenerator: Send + Sync {
    /// Returns PNG bytes.
    async fn generate(&self, image_bytes: Vec<u8>) -> Result<Vec<u8>, ThumbnailError>;
}
