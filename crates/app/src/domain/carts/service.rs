//! Carts service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use cinema_cart::{
    cart::{Cart, QuantityChange},
    items::{AddItemRequest, LineItemId},
    movies::MovieSnapshot,
};
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::domain::carts::{errors::CartsServiceError, repository::CartRepository};

/// Cart service over an injected repository.
///
/// Every mutation reads the stored cart, applies the change, stamps the
/// cart and writes it back. Nothing serialises concurrent callers: two
/// overlapping mutations both start from the same stored cart and the later
/// write wins.
#[derive(Clone)]
pub struct LocalCartsService {
    repository: Arc<dyn CartRepository>,
}

impl LocalCartsService {
    #[must_use]
    pub fn new(repository: Arc<dyn CartRepository>) -> Self {
        Self { repository }
    }

    async fn persist(&self, mut cart: Cart) -> Cart {
        cart.touch(Timestamp::now());

        self.repository.save(&cart).await;

        cart
    }
}

impl fmt::Debug for LocalCartsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalCartsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl CartsService for LocalCartsService {
    async fn get_cart(&self) -> Result<Cart, CartsServiceError> {
        Ok(self.repository.load().await)
    }

    async fn add_item(
        &self,
        movie: MovieSnapshot,
        request: AddItemRequest,
    ) -> Result<Cart, CartsServiceError> {
        let mut cart = self.repository.load().await;

        let item = cart.add_item(movie, request, Timestamp::now())?;

        debug!(%item, total_items = cart.total_items(), "added to cart");

        Ok(self.persist(cart).await)
    }

    async fn remove_item(&self, item: LineItemId) -> Result<Cart, CartsServiceError> {
        let mut cart = self.repository.load().await;

        if cart.remove_item(&item).is_none() {
            debug!(%item, "line not in cart");
        }

        Ok(self.persist(cart).await)
    }

    async fn update_quantity(
        &self,
        item: LineItemId,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError> {
        let mut cart = self.repository.load().await;

        match cart.update_quantity(&item, quantity)? {
            QuantityChange::Updated(quantity) => {
                debug!(%item, quantity = quantity.get(), "updated quantity");
            }
            QuantityChange::Removed => debug!(%item, "removed line with non-positive quantity"),
            QuantityChange::NotFound => debug!(%item, "line not in cart"),
        }

        Ok(self.persist(cart).await)
    }

    async fn clear_cart(&self) -> Result<Cart, CartsServiceError> {
        let cart = self.persist(Cart::empty(Timestamp::now())).await;

        debug!("cleared cart");

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the current cart.
    async fn get_cart(&self) -> Result<Cart, CartsServiceError>;

    /// Add tickets, merging with a line for the same selection.
    async fn add_item(
        &self,
        movie: MovieSnapshot,
        request: AddItemRequest,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove a line. Absent lines are ignored.
    async fn remove_item(&self, item: LineItemId) -> Result<Cart, CartsServiceError>;

    /// Replace a line's quantity; zero or below removes it.
    async fn update_quantity(
        &self,
        item: LineItemId,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError>;

    /// Empty the cart.
    async fn clear_cart(&self) -> Result<Cart, CartsServiceError>;
}
