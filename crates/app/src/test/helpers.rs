//! Test Helpers

use std::num::NonZeroU32;

use cinema_cart::{items::AddItemRequest, movies::MovieSnapshot};

pub(crate) fn movie(id: u64) -> MovieSnapshot {
    MovieSnapshot {
        id,
        title: format!("Movie {id}"),
        sub_title: String::new(),
        poster_img_url: format!("https://example.com/posters/{id}.jpg"),
    }
}

/// Tickets for the 18:00 screening on 2024-05-01 at 12,000 each.
pub(crate) fn ticket_request(movie_id: u64, seats: &[&str], quantity: u32) -> AddItemRequest {
    AddItemRequest {
        movie_id,
        quantity: NonZeroU32::new(quantity).unwrap_or(NonZeroU32::MIN),
        selected_date: "2024-05-01".to_string(),
        selected_time: "18:00".to_string(),
        selected_seats: seats.iter().map(ToString::to_string).collect(),
        price: 12_000,
    }
}
