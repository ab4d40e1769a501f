//! Order Summary

use rusty_money::{Money, iso};
use thiserror::Error;

use crate::{
    cart::Cart,
    items::{CartLineItem, LineItemId},
};

/// Currency every cart is priced in.
pub fn cart_currency() -> &'static iso::Currency {
    iso::KRW
}

/// Errors that can occur while building a summary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    /// An amount does not fit the money representation.
    #[error("amount {0} is out of range")]
    AmountOutOfRange(u64),
}

/// Per-line figures for display.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSummary<'a> {
    /// Line identity
    pub id: LineItemId,

    /// Movie title
    pub title: String,

    /// Ticket count
    pub quantity: u32,

    /// Unit price
    pub unit_price: Money<'a, iso::Currency>,

    /// Unit price multiplied by quantity
    pub subtotal: Money<'a, iso::Currency>,
}

/// Order summary for a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary<'a> {
    lines: Vec<LineSummary<'a>>,
    total_items: u64,
    total_price: Money<'a, iso::Currency>,
}

impl CartSummary<'static> {
    /// Build a summary from a cart.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::AmountOutOfRange`] if a price cannot be
    /// represented as money.
    pub fn from_cart(cart: &Cart) -> Result<Self, SummaryError> {
        let lines = cart
            .items()
            .iter()
            .map(line_summary)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            lines,
            total_items: cart.total_items(),
            total_price: money(cart.total_price())?,
        })
    }
}

impl<'a> CartSummary<'a> {
    /// Per-line figures in cart order.
    pub fn lines(&self) -> &[LineSummary<'a>] {
        &self.lines
    }

    /// Total number of tickets.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Total price.
    pub fn total_price(&self) -> &Money<'a, iso::Currency> {
        &self.total_price
    }

    /// Checkout is only offered for a non-empty cart.
    pub fn can_checkout(&self) -> bool {
        self.total_items > 0
    }
}

fn line_summary(item: &CartLineItem) -> Result<LineSummary<'static>, SummaryError> {
    Ok(LineSummary {
        id: item.id.clone(),
        title: item.movie.title.clone(),
        quantity: item.quantity.get(),
        unit_price: money(item.price)?,
        subtotal: money(item.subtotal())?,
    })
}

fn money(amount: u64) -> Result<Money<'static, iso::Currency>, SummaryError> {
    let minor = i64::try_from(amount)
        .ok()
        .ok_or(SummaryError::AmountOutOfRange(amount))?;

    Ok(Money::from_minor(minor, cart_currency()))
}

/// Format an amount as money in the cart currency.
///
/// # Errors
///
/// Returns [`SummaryError::AmountOutOfRange`] if the amount cannot be
/// represented as money.
pub fn format_price(amount: u64) -> Result<String, SummaryError> {
    Ok(format!("{}", money(amount)?))
}
