//! Session token storage
//!
//! This module persists the access/refresh token pair between requests.
//! It supports:
//! - In-memory storage - default, for embedding and tests
//! - JSON file storage - for the command-line client
//!
//! # Usage
//!
//! ```rust,ignore
//! use reportmitra::storage::{MemoryTokenStore, TokenStore};
//!
//! let store = MemoryTokenStore::boxed();
//! store.save(&tokens).await?;
//! let access = store.access_token().await?;
//! ```

pub mod file;
pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::AuthTokens;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded
    #[error("Invalid token file: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Tokens as persisted. Either half may be missing after a partial write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTokens {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
}

impl From<&AuthTokens> for StoredTokens {
    fn from(tokens: &AuthTokens) -> Self {
        Self {
            access: Some(tokens.access.clone()),
            refresh: Some(tokens.refresh.clone()),
        }
    }
}

/// Token store trait
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read both tokens
    async fn load(&self) -> Result<StoredTokens, StorageError>;

    /// Replace both tokens
    async fn store(&self, tokens: StoredTokens) -> Result<(), StorageError>;

    /// Remove both tokens
    async fn clear(&self) -> Result<(), StorageError>;

    /// Current access token, if any
    async fn access_token(&self) -> Result<Option<String>, StorageError> {
        Ok(self.load().await?.access)
    }

    /// Current refresh token, if any
    async fn refresh_token(&self) -> Result<Option<String>, StorageError> {
        Ok(self.load().await?.refresh)
    }

    /// Save a freshly issued token pair
    async fn save(&self, tokens: &AuthTokens) -> Result<(), StorageError> {
        self.store(StoredTokens::from(tokens)).await
    }

    /// Replace the access token, keeping the refresh token
    async fn set_access_token(&self, access: &str) -> Result<(), StorageError> {
        let mut tokens = self.load().await?;
        tokens.access = Some(access.to_string());
        self.store(tokens).await
    }
}
