//! In-memory token store

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{StorageError, StoredTokens, TokenStore};

/// Token store that lives as long as the process
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<StoredTokens>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token pair already present
    pub fn with_tokens(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            tokens: RwLock::new(StoredTokens {
                access: Some(access.into()),
                refresh: Some(refresh.into()),
            }),
        }
    }

    /// Create a boxed store for use with dependency injection
    pub fn boxed() -> Arc<dyn TokenStore> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<StoredTokens, StorageError> {
        Ok(self.tokens.read().await.clone())
    }

    async fn store(&self, tokens: StoredTokens) -> Result<(), StorageError> {
        *self.tokens.write().await = tokens;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.tokens.write().await = StoredTokens::default();
        Ok(())
    }
}
