//! Cinema Cart
//!
//! Ticket cart aggregate for a movie storefront: line items keyed by their
//! screening selection, merged quantities and totals that are always derived
//! from the lines.

pub mod cart;
pub mod items;
pub mod movies;
pub mod pricing;
pub mod prelude;
pub mod summary;
