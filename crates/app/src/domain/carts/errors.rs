//! Carts service errors.

use cinema_cart::cart::CartError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartsServiceError {
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Failure reported by a cart backend other than local storage. The
    /// message may be empty.
    #[error("{0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use cinema_cart::items::LineItemId;

    use super::*;

    #[test]
    fn cart_errors_keep_their_description() {
        let error = CartsServiceError::from(CartError::QuantityOverflow(LineItemId::from("7-x")));

        assert_eq!(error.to_string(), "quantity for line 7-x is out of range");
    }
}
