//! Error types for the fallible edges of the order book.
//!
//! The core operations (`add_order`, `match_orders`) never fail. Errors only
//! arise when parsing textual orders or when a caller opts into hardened
//! admission through [`crate::OrderBook::try_add_order`].

use thiserror::Error;

/// Errors raised while parsing or validating orders
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// Price text could not be parsed as a decimal number
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Size text could not be parsed as an integer
    #[error("Invalid size: {0}")]
    InvalidSize(String),

    /// Side text was neither `buy` nor `sell`
    #[error("Invalid side: {0}")]
    InvalidSide(String),

    /// Order text did not have the `price-size-side` shape
    #[error("Malformed order: {0}")]
    Malformed(String),

    /// Price is NaN or infinite
    #[error("Price is not finite: {0}")]
    NonFinitePrice(f64),

    /// Price below zero
    #[error("Negative price: {0}")]
    NegativePrice(f64),

    /// Size below zero
    #[error("Negative size: {0}")]
    NegativeSize(i64),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            OrderError::InvalidSide("hold".to_string()).to_string(),
            "Invalid side: hold"
        );
        assert_eq!(OrderError::NegativeSize(-5).to_string(), "Negative size: -5");
        assert_eq!(
            OrderError::Malformed("3.00-buy".to_string()).to_string(),
            "Malformed order: 3.00-buy"
        );
    }
}
