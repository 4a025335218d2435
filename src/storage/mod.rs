pub mod local;
pub mod s3;

pub use local::LocalBackend;
pub use s3::S3Backend;

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

#[derive(Debug)]
pub enum StorageError {
    NotFound,
    Backend(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::NotFound => write!(f, "object not found"),
            StorageError::Backend(msg) => write!(f, "storage backend error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            StorageError::NotFound
        } else {
            StorageError::Backend(err.to_string())
        }
    }
}

/// One place artifacts can live. Keys are `{presentation_id}/{filename}`
/// and never contain `..` or separators beyond that single slash.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Write an object, overwriting any previous version.
    async fn put(&self, key: &str, data: Bytes) -> Result<(), StorageError>;

    /// Read an object. `StorageError::NotFound` if the key does not exist.
    async fn get(&self, key: &str) -> Result<Bytes, StorageError>;

    /// Check whether an object exists.
    async fn exists(&self, key: &str) -> Result<bool, StorageError>;

    /// Remove every object under the given prefix. Missing prefixes are
    /// not an error.
    async fn delete_prefix(&self, prefix: &str) -> Result<(), StorageError>;
}

/// Local disk plus an optional remote mirror.
///
/// The local backend is the write floor: a put that fails locally fails the
/// operation. The remote, when present, is a best-effort mirror whose
/// failures are logged and swallowed. Reads try local first and fall back
/// to the remote, filling the local copy back in on a hit so later reads
/// stay cheap. Whether a remote participates is decided once, at startup,
/// by probing it; `remote_available` reports that decision.
pub struct Storage {
    local: LocalBackend,
    remote: Option<Arc<dyn StorageBackend>>,
}

impl Storage {
    pub fn new(local: LocalBackend, remote: Option<Arc<dyn StorageBackend>>) -> Self {
        Self { local, remote }
    }

    pub fn local_only(local: LocalBackend) -> Self {
        Self { local, remote: None }
    }

    pub fn remote_available(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn put(&self, key: &str, data: Bytes) -> Result<(), StorageError> {
        self.local.put(key, data.clone()).await?;
        if let Some(remote) = &self.remote {
            if let Err(e) = remote.put(key, data).await {
                log::warn!("remote mirror write failed for {key}: {e}");
            }
        }
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Bytes, StorageError> {
        match self.local.get(key).await {
            Ok(data) => Ok(data),
            Err(StorageError::NotFound) => {
                let Some(remote) = &self.remote else {
                    return Err(StorageError::NotFound);
                };
                let data = remote.get(key).await?;
                if let Err(e) = self.local.put(key, data.clone()).await {
                    log::warn!("local fill after remote read failed for {key}: {e}");
                }
                Ok(data)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        if self.local.exists(key).await? {
            return Ok(true);
        }
        match &self.remote {
            Some(remote) => remote.exists(key).await,
            None => Ok(false),
        }
    }

    pub async fn delete_prefix(&self, prefix: &str) -> Result<(), StorageError> {
        self.local.delete_prefix(prefix).await?;
        if let Some(remote) = &self.remote {
            if let Err(e) = remote.delete_prefix(prefix).await {
                log::warn!("remote mirror delete failed for {prefix}: {e}");
            }
        }
        Ok(())
    }
}

/// MIME type for serving a stored artifact, keyed on extension.
pub fn content_type_for(filename: &str) -> &'static str {
    let lower = filename.to_ascii_lowercase();
    if lower.ends_with(".pptx") {
        "application/vnd.openxmlformats-officedocument.presentationml.presentation"
    } else if lower.ends_with(".pdf") {
        "application/pdf"
    } else if lower.ends_with(".json") {
        "application/json"
    } else if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}
