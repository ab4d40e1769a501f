//! Line Items

use std::{
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    num::NonZeroU32,
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{movies::MovieSnapshot, pricing::line_total};

/// Deterministic identity of a cart line.
///
/// Built from the movie id, the selected date and time, and the selected
/// seats, so the same selection always maps to the same line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(String);

impl LineItemId {
    /// Compute the identity for a selection.
    ///
    /// Seats are compared as a set: their order in the request does not
    /// affect the identity.
    pub fn for_selection<S: AsRef<str>>(movie_id: u64, date: &str, time: &str, seats: &[S]) -> Self {
        let mut seats: Vec<&str> = seats.iter().map(AsRef::as_ref).collect();
        seats.sort_unstable();

        Self(format!("{movie_id}-{date}-{time}-{}", seats.join(",")))
    }

    /// Compute the identity an add request resolves to.
    pub fn for_request(request: &AddItemRequest) -> Self {
        Self::for_selection(
            request.movie_id,
            &request.selected_date,
            &request.selected_time,
            &request.selected_seats,
        )
    }

    /// Borrow the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LineItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for LineItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for LineItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl FromStr for LineItemId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Request to put tickets for a screening into the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    /// Movie the tickets are for
    pub movie_id: u64,

    /// Number of tickets to add
    pub quantity: NonZeroU32,

    /// Screening date
    pub selected_date: String,

    /// Screening time
    pub selected_time: String,

    /// Seat labels, in the order they were picked
    pub selected_seats: Vec<String>,

    /// Unit price
    pub price: u64,
}

/// A single line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Line identity
    pub id: LineItemId,

    /// Movie snapshot taken when the line was created
    pub movie: MovieSnapshot,

    /// Ticket count
    pub quantity: NonZeroU32,

    /// Unit price
    pub price: u64,

    /// Screening date
    pub selected_date: String,

    /// Screening time
    pub selected_time: String,

    /// Seat labels
    pub selected_seats: Vec<String>,

    /// When the line was first added
    pub added_at: Timestamp,
}

impl CartLineItem {
    /// Build a fresh line from an add request.
    pub fn new(movie: MovieSnapshot, request: AddItemRequest, added_at: Timestamp) -> Self {
        Self {
            id: LineItemId::for_request(&request),
            movie,
            quantity: request.quantity,
            price: request.price,
            selected_date: request.selected_date,
            selected_time: request.selected_time,
            selected_seats: request.selected_seats,
            added_at,
        }
    }

    /// Unit price multiplied by quantity.
    pub fn subtotal(&self) -> u64 {
        line_total(self.price, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(seats: &[&str]) -> AddItemRequest {
        AddItemRequest {
            movie_id: 7,
            quantity: NonZeroU32::MIN,
            selected_date: "2024-05-01".to_string(),
            selected_time: "18:00".to_string(),
            selected_seats: seats.iter().map(ToString::to_string).collect(),
            price: 12_000,
        }
    }

    #[test]
    fn identity_joins_selection_fields() {
        let id = LineItemId::for_request(&request(&["A1", "A2"]));

        assert_eq!(id.as_str(), "7-2024-05-01-18:00-A1,A2");
    }

    #[test]
    fn identity_ignores_seat_order() {
        assert_eq!(
            LineItemId::for_request(&request(&["A2", "A1"])),
            LineItemId::for_request(&request(&["A1", "A2"])),
        );
    }

    #[test]
    fn identity_without_seats_ends_with_separator() {
        let id = LineItemId::for_request(&request(&[]));

        assert_eq!(id.to_string(), "7-2024-05-01-18:00-");
    }

    #[test]
    fn new_line_keeps_seats_in_request_order() {
        let line = CartLineItem::new(
            MovieSnapshot::new(7, "Exhuma"),
            request(&["B3", "B1"]),
            Timestamp::UNIX_EPOCH,
        );

        assert_eq!(line.selected_seats, ["B3", "B1"]);
        assert_eq!(line.id.as_str(), "7-2024-05-01-18:00-B1,B3");
        assert_eq!(line.added_at, Timestamp::UNIX_EPOCH);
    }

    #[test]
    fn subtotal_multiplies_price_by_quantity() {
        let mut line = CartLineItem::new(
            MovieSnapshot::new(7, "Exhuma"),
            request(&["A1"]),
            Timestamp::UNIX_EPOCH,
        );
        line.quantity = NonZeroU32::new(3).unwrap_or(NonZeroU32::MIN);

        assert_eq!(line.subtotal(), 36_000);
    }
}
