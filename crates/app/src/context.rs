//! App Context

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;

use crate::{
    domain::carts::{CartsService, LocalCartsService, StorageCartRepository},
    storage::{FileStore, KeyValueStore, MemoryStore, StorageError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open cart storage")]
    Storage(#[source] StorageError),
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
}

impl AppContext {
    /// Build application context over a storage directory.
    ///
    /// # Errors
    ///
    /// Returns an error when the storage directory cannot be created.
    pub async fn from_storage_dir(dir: impl Into<PathBuf>) -> Result<Self, AppInitError> {
        let store = FileStore::open(dir).await.map_err(AppInitError::Storage)?;

        Ok(Self::from_store(Arc::new(store)))
    }

    /// Build application context over process-local storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(MemoryStore::new()))
    }

    /// Build application context with no storage; every load is empty.
    #[must_use]
    pub fn detached() -> Self {
        Self::with_repository(StorageCartRepository::detached())
    }

    fn from_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_repository(StorageCartRepository::new(store))
    }

    fn with_repository(repository: StorageCartRepository) -> Self {
        Self {
            carts: Arc::new(LocalCartsService::new(Arc::new(repository))),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{movie, ticket_request};

    use super::*;

    #[tokio::test]
    async fn storage_dir_context_persists_between_instances() -> TestResult {
        let dir = tempfile::tempdir()?;

        AppContext::from_storage_dir(dir.path())
            .await?
            .carts
            .add_item(movie(7), ticket_request(7, &["A1"], 2))
            .await?;

        let cart = AppContext::from_storage_dir(dir.path())
            .await?
            .carts
            .get_cart()
            .await?;

        assert_eq!(cart.total_items(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn in_memory_context_remembers_within_instance() -> TestResult {
        let ctx = AppContext::in_memory();

        ctx.carts
            .add_item(movie(7), ticket_request(7, &["A1"], 2))
            .await?;

        assert_eq!(ctx.carts.get_cart().await?.total_items(), 2);
        assert!(AppContext::in_memory().carts.get_cart().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn detached_context_never_remembers() -> TestResult {
        let ctx = AppContext::detached();

        ctx.carts
            .add_item(movie(7), ticket_request(7, &["A1"], 2))
            .await?;

        assert!(ctx.carts.get_cart().await?.is_empty());

        Ok(())
    }
}
