//! Cinema Cart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, QuantityChange},
    items::{AddItemRequest, CartLineItem, LineItemId},
    movies::MovieSnapshot,
    pricing::{Totals, line_total, totals},
    summary::{CartSummary, LineSummary, SummaryError, cart_currency, format_price},
};
