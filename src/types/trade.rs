//! Trade type representing an executed match between a bid and an ask.

use std::fmt;

use rust_decimal::Decimal;

use crate::types::price::{format_price, notional};

/// A single execution produced by a match pass.
///
/// ## Price Discovery
///
/// The trade always executes at the resting ask's price, never the bid's
/// price or a midpoint.
///
/// ## Example
///
/// ```
/// use crossbook::types::Trade;
///
/// let trade = Trade::new(200, 2.0);
/// assert_eq!(trade.to_string(), "Match: 200 @ 2.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trade {
    /// Executed quantity, `min(ask.size, bid.size)` at match time
    pub size: i64,

    /// Execution price (the ask's price)
    pub price: f64,
}

impl Trade {
    /// Create a new trade
    pub fn new(size: i64, price: f64) -> Self {
        Self { size, price }
    }

    /// Notional value of this trade (size * price), rounded to the cent
    ///
    /// Returns `None` if the price is not finite.
    pub fn notional(&self) -> Option<Decimal> {
        notional(self.size, self.price)
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Match: {} @ {}", self.size, format_price(self.price))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
