//! Cart

use std::num::NonZeroU32;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    items::{AddItemRequest, CartLineItem, LineItemId},
    movies::MovieSnapshot,
    pricing::{Totals, totals},
};

/// Errors raised by cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The resulting quantity for a line does not fit in a `u32`.
    #[error("quantity for line {0} is out of range")]
    QuantityOverflow(LineItemId),
}

/// Outcome of [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now has the given quantity.
    Updated(NonZeroU32),

    /// The requested quantity was not positive, so the line was dropped.
    Removed,

    /// No line has the given identity.
    NotFound,
}

/// Ticket cart.
///
/// Totals are private and recomputed from `items` after every mutation, so
/// they cannot drift from the line sequence. Deserialising a cart also
/// recomputes them; stored totals are never trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "CartRecord")]
pub struct Cart {
    items: Vec<CartLineItem>,
    total_items: u64,
    total_price: u64,
    updated_at: Timestamp,
}

/// Persisted cart shape. Totals in the record are ignored on read.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartRecord {
    items: Vec<CartLineItem>,
    updated_at: Timestamp,
}

impl From<CartRecord> for Cart {
    fn from(record: CartRecord) -> Self {
        Self::with_items(record.items, record.updated_at)
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn empty(now: Timestamp) -> Self {
        Self::with_items(Vec::new(), now)
    }

    /// Create a cart from existing lines.
    pub fn with_items(items: Vec<CartLineItem>, updated_at: Timestamp) -> Self {
        let Totals {
            items: total_items,
            price: total_price,
        } = totals(&items);

        Self {
            items,
            total_items,
            total_price,
            updated_at,
        }
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Look up a line by identity.
    pub fn get(&self, id: &LineItemId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Sum of line quantities.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Sum of unit price times quantity.
    pub fn total_price(&self) -> u64 {
        self.total_price
    }

    /// When the cart was last mutated.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add tickets, merging into an existing line with the same identity.
    ///
    /// New lines are appended and stamped with `now`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] when the merged quantity does not
    /// fit in a `u32`. The cart is left untouched in that case.
    pub fn add_item(
        &mut self,
        movie: MovieSnapshot,
        request: AddItemRequest,
        now: Timestamp,
    ) -> Result<LineItemId, CartError> {
        let id = LineItemId::for_request(&request);

        if let Some(existing) = self.items.iter_mut().find(|item| item.id == id) {
            existing.quantity = existing
                .quantity
                .checked_add(request.quantity.get())
                .ok_or_else(|| CartError::QuantityOverflow(id.clone()))?;
        } else {
            self.items.push(CartLineItem::new(movie, request, now));
        }

        self.retotal();

        Ok(id)
    }

    /// Remove a line. Returns the removed line, or `None` if it was absent.
    pub fn remove_item(&mut self, id: &LineItemId) -> Option<CartLineItem> {
        let index = self.items.iter().position(|item| item.id == *id)?;
        let removed = self.items.remove(index);

        self.retotal();

        Some(removed)
    }

    /// Replace the quantity of a line.
    ///
    /// A quantity of zero or below removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] when `quantity` does not fit in a
    /// `u32` and the line exists.
    pub fn update_quantity(
        &mut self,
        id: &LineItemId,
        quantity: i64,
    ) -> Result<QuantityChange, CartError> {
        let Some(index) = self.items.iter().position(|item| item.id == *id) else {
            return Ok(QuantityChange::NotFound);
        };

        if quantity <= 0 {
            self.items.remove(index);
            self.retotal();

            return Ok(QuantityChange::Removed);
        }

        let quantity = u32::try_from(quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| CartError::QuantityOverflow(id.clone()))?;

        if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity;
        }

        self.retotal();

        Ok(QuantityChange::Updated(quantity))
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.items.clear();
        self.retotal();
    }

    /// Mark the cart as modified at `now`.
    pub fn touch(&mut self, now: Timestamp) {
        self.updated_at = now;
    }

    fn retotal(&mut self) {
        let Totals { items, price } = totals(&self.items);

        self.total_items = items;
        self.total_price = price;
    }
}
