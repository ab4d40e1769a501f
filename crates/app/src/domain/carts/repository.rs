//! Carts Repository
//!
//! Persists the whole cart as one JSON record under a fixed storage key.
//! Reads and writes never fail from the caller's point of view: a missing
//! or corrupt record reads as an empty cart, and a failed write is logged
//! and dropped.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use cinema_cart::cart::Cart;
use jiff::Timestamp;
use mockall::automock;
use tracing::{debug, error, warn};

use crate::storage::KeyValueStore;

/// Storage key holding the cart record.
pub const CART_STORAGE_KEY: &str = "onebite-cinema-cart";

#[automock]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Load the persisted cart, or an empty one.
    async fn load(&self) -> Cart;

    /// Overwrite the persisted cart. Best effort.
    async fn save(&self, cart: &Cart);
}

#[derive(Clone)]
pub struct StorageCartRepository {
    storage: Option<Arc<dyn KeyValueStore>>,
}

impl StorageCartRepository {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    /// Repository with no storage behind it: loads are always empty and
    /// saves are dropped.
    #[must_use]
    pub fn detached() -> Self {
        Self { storage: None }
    }

    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.storage.is_none()
    }
}

impl fmt::Debug for StorageCartRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageCartRepository")
            .field("detached", &self.is_detached())
            .finish()
    }
}

#[async_trait]
impl CartRepository for StorageCartRepository {
    async fn load(&self) -> Cart {
        let Some(storage) = &self.storage else {
            return Cart::empty(Timestamp::now());
        };

        let raw = match storage.get(CART_STORAGE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::empty(Timestamp::now()),
            Err(source) => {
                error!("failed to read cart from storage: {source}");

                return Cart::empty(Timestamp::now());
            }
        };

        match serde_json::from_str::<Cart>(&raw) {
            Ok(cart) => {
                debug!(lines = cart.len(), "loaded cart");

                cart
            }
            Err(source) => {
                warn!("discarding unreadable cart record: {source}");

                Cart::empty(Timestamp::now())
            }
        }
    }

    async fn save(&self, cart: &Cart) {
        let Some(storage) = &self.storage else {
            return;
        };

        let raw = match serde_json::to_string(cart) {
            Ok(raw) => raw,
            Err(source) => {
                error!("failed to serialize cart: {source}");

                return;
            }
        };

        if let Err(source) = storage.set(CART_STORAGE_KEY, raw).await {
            error!("failed to save cart to storage: {source}");
        }
    }
}
