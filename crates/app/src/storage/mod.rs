//! Client-side key-value storage.
//!
//! A single slot per key, overwritten whole on every write.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o failed")]
    Io(#[from] std::io::Error),

    #[error("writing {size} bytes to {key} exceeds the {quota} byte quota")]
    QuotaExceeded {
        key: String,
        size: usize,
        quota: usize,
    },
}

#[automock]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}
