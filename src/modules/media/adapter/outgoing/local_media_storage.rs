use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use crate::media::application::domain::upload_policy::extension_of;
use crate::media::application::ports::outgoing::{MediaStorage, MediaStorageError};

const HASH_PREFIX_LEN: usize = 12;
const UPLOAD_TOKEN_LEN: usize = 8;
const MAX_STEM_LEN: usize = 80;

/// Writes uploads under a directory served at the media URL.
#[derive(Debug, Clone)]
pub struct LocalMediaStorage {
    root: PathBuf,
}

impl LocalMediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, relative: &str) -> Result<PathBuf, MediaStorageError> {
        let path = Path::new(relative);
        let safe = !relative.is_empty()
            && path
                .components()
                .all(|c| matches!(c, Component::Normal(_)));

        if !safe {
            return Err(MediaStorageError::InvalidPath(relative.to_string()));
        }

        Ok(self.root.join(path))
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(
        &self,
        folder: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, MediaStorageError> {
        let relative = format!("{}/{}", folder, stored_file_name(file_name, bytes));
        let target = self.resolve(&relative)?;

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| MediaStorageError::Io(e.to_string()))?;
        }

        tokio::fs::write(&target, bytes)
            .await
            .map_err(|e| MediaStorageError::Io(e.to_string()))?;

        debug!(path = %relative, size = bytes.len(), "Stored media file");
        Ok(relative)
    }

    async fn delete(&self, path: &str) -> Result<(), MediaStorageError> {
        let target = self.resolve(path)?;

        match tokio::fs::remove_file(&target).await {
            Ok(()) => {
                debug!(path = %path, "Deleted media file");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MediaStorageError::Io(e.to_string())),
        }
    }
}

/// `<sha256 prefix>-<upload token>-<sanitized stem>.<ext>`. The token keeps
/// repeated uploads of the same file apart, so each record owns its path.
fn stored_file_name(original: &str, bytes: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(bytes));
    let hash = &digest[..HASH_PREFIX_LEN];
    let token = Uuid::new_v4().simple().to_string();
    let token = &token[..UPLOAD_TOKEN_LEN];

    let original = original.trim();
    let ext = extension_of(original);
    let stem = match &ext {
        Some(ext) => &original[..original.len() - ext.len() - 1],
        None => original,
    };

    let mut clean: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(MAX_STEM_LEN)
        .collect();

    if clean.trim_matches('_').is_empty() {
        clean = "file".to_string();
    }

    match ext {
        Some(ext) => format!("{hash}-{token}-{clean}.{ext}"),
        None => format!("{hash}-{token}-{clean}"),
    }
}
