//! Cinema Domain Concerns

pub mod carts;
