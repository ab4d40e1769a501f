//! Cart view-model.
//!
//! Presentation-facing wrapper around [`CartsService`]. Each operation goes
//! through `Loading` and settles as `Success` or `Error`; on error the last
//! known cart stays in place.

use std::{fmt, sync::Arc};

use cinema_cart::{
    cart::Cart,
    items::{AddItemRequest, LineItemId},
    movies::MovieSnapshot,
};
use jiff::Timestamp;
use tracing::warn;

use crate::domain::carts::{errors::CartsServiceError, service::CartsService};

const LOAD_FAILED: &str = "Failed to load cart";
const ADD_FAILED: &str = "Failed to add item to cart";
const REMOVE_FAILED: &str = "Failed to remove item from cart";
const UPDATE_FAILED: &str = "Failed to update quantity";
const CLEAR_FAILED: &str = "Failed to clear cart";

/// Lifecycle of the most recent request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Loading,
    Success,
    Error(String),
}

pub struct CartViewModel {
    service: Arc<dyn CartsService>,
    cart: Cart,
    state: RequestState,
}

impl CartViewModel {
    /// Build a view-model and load the stored cart.
    pub async fn mount(service: Arc<dyn CartsService>) -> Self {
        let mut view_model = Self {
            service,
            cart: Cart::empty(Timestamp::now()),
            state: RequestState::Loading,
        };

        view_model.refresh().await;

        view_model
    }

    /// Last known cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state == RequestState::Loading
    }

    /// Message from the most recent failed request.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            RequestState::Error(message) => Some(message.as_str()),
            RequestState::Loading | RequestState::Success => None,
        }
    }

    /// Reload the cart from storage.
    pub async fn refresh(&mut self) {
        self.state = RequestState::Loading;

        let result = self.service.get_cart().await;

        self.settle(result, LOAD_FAILED);
    }

    pub async fn add_to_cart(&mut self, movie: MovieSnapshot, request: AddItemRequest) {
        self.state = RequestState::Loading;

        let result = self.service.add_item(movie, request).await;

        self.settle(result, ADD_FAILED);
    }

    pub async fn remove_from_cart(&mut self, item: LineItemId) {
        self.state = RequestState::Loading;

        let result = self.service.remove_item(item).await;

        self.settle(result, REMOVE_FAILED);
    }

    pub async fn update_quantity(&mut self, item: LineItemId, quantity: i64) {
        self.state = RequestState::Loading;

        let result = self.service.update_quantity(item, quantity).await;

        self.settle(result, UPDATE_FAILED);
    }

    pub async fn clear_cart(&mut self) {
        self.state = RequestState::Loading;

        let result = self.service.clear_cart().await;

        self.settle(result, CLEAR_FAILED);
    }

    fn settle(&mut self, result: Result<Cart, CartsServiceError>, fallback: &str) {
        match result {
            Ok(cart) => {
                self.cart = cart;
                self.state = RequestState::Success;
            }
            Err(error) => {
                warn!("{fallback}: {error}");

                self.state = RequestState::Error(failure_message(&error, fallback));
            }
        }
    }
}

impl fmt::Debug for CartViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartViewModel")
            .field("cart", &self.cart)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

fn failure_message(error: &CartsServiceError, fallback: &str) -> String {
    let description = error.to_string();

    if description.trim().is_empty() {
        fallback.to_owned()
    } else {
        description
    }
}

#[cfg(test)]
mod tests {
    use cinema_cart::cart::CartError;
    use testresult::TestResult;

    use crate::{
        domain::carts::service::MockCartsService,
        test::{TestContext, movie, ticket_request},
    };

    use super::*;

    #[tokio::test]
    async fn mount_loads_stored_cart() -> TestResult {
        let ctx = TestContext::new();

        ctx.carts
            .add_item(movie(7), ticket_request(7, &["A1"], 2))
            .await?;

        let view_model = CartViewModel::mount(Arc::new(ctx.carts.clone())).await;

        assert_eq!(view_model.state(), &RequestState::Success);
        assert_eq!(view_model.cart().total_items(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn operations_update_displayed_cart() {
        let ctx = TestContext::new();
        let mut view_model = CartViewModel::mount(Arc::new(ctx.carts.clone())).await;
        let request = ticket_request(7, &["A1", "A2"], 2);
        let id = LineItemId::for_request(&request);

        view_model.add_to_cart(movie(7), request).await;
        view_model
            .add_to_cart(movie(7), ticket_request(7, &["A1", "A2"], 1))
            .await;

        assert_eq!(view_model.cart().total_items(), 3);
        assert_eq!(view_model.cart().total_price(), 36_000);

        view_model.update_quantity(id.clone(), 1).await;
        assert_eq!(view_model.cart().total_items(), 1);

        view_model.remove_from_cart(id).await;
        assert!(view_model.cart().is_empty());
        assert!(!view_model.is_loading());
        assert_eq!(view_model.error(), None);
    }

    #[tokio::test]
    async fn refresh_picks_up_changes_from_other_writers() -> TestResult {
        let ctx = TestContext::new();
        let mut view_model = CartViewModel::mount(Arc::new(ctx.carts.clone())).await;

        ctx.carts
            .add_item(movie(8), ticket_request(8, &["C1"], 4))
            .await?;

        assert!(view_model.cart().is_empty());

        view_model.refresh().await;

        assert_eq!(view_model.cart().total_items(), 4);

        Ok(())
    }

    #[tokio::test]
    async fn failure_keeps_previous_cart_visible() -> TestResult {
        let mut stored = Cart::empty(Timestamp::now());
        stored.add_item(movie(7), ticket_request(7, &["A1"], 2), Timestamp::now())?;

        let mut service = MockCartsService::new();

        let loaded = stored.clone();

        service
            .expect_get_cart()
            .once()
            .returning(move || Ok(loaded.clone()));
        service
            .expect_update_quantity()
            .once()
            .returning(|item, _| Err(CartError::QuantityOverflow(item).into()));

        let mut view_model = CartViewModel::mount(Arc::new(service)).await;

        view_model
            .update_quantity(LineItemId::from("7-2024-05-01-18:00-A1"), i64::MAX)
            .await;

        assert_eq!(view_model.cart(), &stored);
        assert_eq!(
            view_model.error(),
            Some("quantity for line 7-2024-05-01-18:00-A1 is out of range")
        );

        Ok(())
    }

    #[tokio::test]
    async fn empty_description_falls_back_to_operation_message() {
        let mut service = MockCartsService::new();

        service
            .expect_get_cart()
            .once()
            .returning(|| Ok(Cart::empty(Timestamp::now())));
        service
            .expect_clear_cart()
            .once()
            .returning(|| Err(CartsServiceError::Backend(String::new())));

        let mut view_model = CartViewModel::mount(Arc::new(service)).await;
        view_model.clear_cart().await;

        assert_eq!(view_model.error(), Some(CLEAR_FAILED));
    }

    #[tokio::test]
    async fn failed_mount_reports_load_error() {
        let mut service = MockCartsService::new();

        service
            .expect_get_cart()
            .once()
            .returning(|| Err(CartsServiceError::Backend("offline".to_string())));

        let view_model = CartViewModel::mount(Arc::new(service)).await;

        assert_eq!(
            view_model.state(),
            &RequestState::Error("offline".to_string())
        );
        assert!(view_model.cart().is_empty());
    }

    #[tokio::test]
    async fn success_clears_previous_error() {
        let mut service = MockCartsService::new();

        let mut calls = 0;

        service.expect_get_cart().times(2).returning(move || {
            calls += 1;

            if calls == 1 {
                Err(CartsServiceError::Backend(String::new()))
            } else {
                Ok(Cart::empty(Timestamp::now()))
            }
        });

        let mut view_model = CartViewModel::mount(Arc::new(service)).await;

        assert_eq!(view_model.error(), Some(LOAD_FAILED));

        view_model.refresh().await;

        assert_eq!(view_model.state(), &RequestState::Success);
    }
}
