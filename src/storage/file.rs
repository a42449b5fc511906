//! JSON file token store
//!
//! Keeps the session between CLI invocations. A missing file means "logged
//! out"; clearing deletes the file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{StorageError, StoredTokens, TokenStore};

/// Token store backed by a single JSON file
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    // Serializes read-modify-write cycles such as `set_access_token`
    lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Create a boxed store for use with dependency injection
    pub fn boxed(path: impl Into<PathBuf>) -> Arc<dyn TokenStore> {
        Arc::new(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<StoredTokens, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(StoredTokens::default()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoredTokens::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, tokens: &StoredTokens) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_vec_pretty(tokens)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<StoredTokens, StorageError> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    async fn store(&self, tokens: StoredTokens) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        self.write(&tokens).await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_access_token(&self, access: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut tokens = self.read().await?;
        tokens.access = Some(access.to_string());
        self.write(&tokens).await
    }
}
