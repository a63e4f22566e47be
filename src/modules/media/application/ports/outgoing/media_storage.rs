use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaStorageError {
    #[error("Invalid media path: {0}")]
    InvalidPath(String),

    #[error("Storage I/O error: {0}")]
    Io(String),
}

/// Stores uploaded files. Paths are relative to the media root, e.g.
/// `profile_images/3fa2c1d9e0b4-7c1e52aa-me.png`. Every `store` call returns
/// a path no earlier upload uses, so deleting one record's file never
/// touches another's.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    async fn store(
        &self,
        folder: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, MediaStorageError>;

    /// Deleting a missing file is not an error.
    async fn delete(&self, path: &str) -> Result<(), MediaStorageError>;
}
