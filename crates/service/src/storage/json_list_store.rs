use std::{marker::PhantomData, path::{Path, PathBuf}};

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;
use tracing::{debug, warn};

use crate::errors::ServiceError;

/// JSON file holding a bare array of records.
///
/// Every `load` reads the whole file and every `save` rewrites it; there is no
/// wrapping metadata and no versioning.
#[derive(Debug, Clone)]
pub struct JsonListStore<T> {
    file_path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonListStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Open the store at `path`. Creates parent directories and an empty `[]`
    /// file when missing; failures here are logged, not returned.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Self {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.ok();
        }

        if fs::metadata(&file_path).await.is_err() {
            match fs::write(&file_path, b"[]").await {
                Ok(()) => debug!(path = %file_path.display(), "created empty store file"),
                Err(e) => warn!(path = %file_path.display(), error = %e, "cannot create store file"),
            }
        }

        Self { file_path, _records: PhantomData }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read and parse the whole file.
    pub async fn load(&self) -> Result<Vec<T>, ServiceError> {
        let bytes = fs::read(&self.file_path)
            .await
            .map_err(|e| ServiceError::Storage(format!("read {}: {}", self.file_path.display(), e)))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::Storage(format!("parse {}: {}", self.file_path.display(), e)))
    }

    /// Serialize all records and overwrite the file.
    pub async fn save(&self, records: &[T]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec(records).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(format!("write {}: {}", self.file_path.display(), e)))
    }
}
