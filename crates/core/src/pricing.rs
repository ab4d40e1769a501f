//! Prices

use std::num::NonZeroU32;

use crate::items::CartLineItem;

/// Derived cart totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// Sum of line quantities
    pub items: u64,

    /// Sum of unit price times quantity over all lines
    pub price: u64,
}

/// Unit price multiplied by quantity, saturating at `u64::MAX`.
pub fn line_total(price: u64, quantity: NonZeroU32) -> u64 {
    price.saturating_mul(u64::from(quantity.get()))
}

/// Calculates the totals of a sequence of lines.
pub fn totals(items: &[CartLineItem]) -> Totals {
    items.iter().fold(Totals::default(), |acc, item| Totals {
        items: acc.items.saturating_add(u64::from(item.quantity.get())),
        price: acc.price.saturating_add(item.subtotal()),
    })
}
