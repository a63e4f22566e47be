use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::media::application::ports::outgoing::{MediaStorage, MediaStorageError};

/// Keeps files in a map; `failing()` makes every write fail.
#[derive(Clone, Default)]
pub struct InMemoryMediaStorage {
    files: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
    deleted: Arc<Mutex<Vec<String>>>,
    fail_writes: bool,
}

impl InMemoryMediaStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn with_file(self, path: &str, bytes: &[u8]) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), bytes.to_vec());
        self
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaStorage for InMemoryMediaStorage {
    async fn store(
        &self,
        folder: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, MediaStorageError> {
        if self.fail_writes {
            return Err(MediaStorageError::Io("disk full".to_string()));
        }

        let path = format!("{folder}/{file_name}");
        self.files
            .lock()
            .unwrap()
            .insert(path.clone(), bytes.to_vec());
        Ok(path)
    }

    async fn delete(&self, path: &str) -> Result<(), MediaStorageError> {
        self.files.lock().unwrap().remove(path);
        self.deleted.lock().unwrap().push(path.to_string());
        Ok(())
    }
}
