//! Carts

pub mod errors;
pub mod repository;
pub mod service;
pub mod view_model;

pub use errors::CartsServiceError;
pub use repository::*;
pub use service::*;
pub use view_model::*;
