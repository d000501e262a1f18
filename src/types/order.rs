//! Order types for the crossbook matching engine.
//!
//! ## Text Form
//!
//! An order renders as `"<price>-<size>-<side>"` with the price fixed to two
//! decimal places, e.g. `3.00-300-buy`. The same form parses back through
//! [`FromStr`], which is how the driver binary reads orders from the command
//! line.

use std::fmt;
use std::str::FromStr;

use crate::error::{OrderError, Result};
use crate::types::price::{format_price, parse_price};

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy order (bid)
    Buy,
    /// Sell order (ask)
    Sell,
}

impl Side {
    /// Lowercase label used in the text form
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" | "bid" => Ok(Side::Buy),
            "sell" | "ask" => Ok(Side::Sell),
            _ => Err(OrderError::InvalidSide(s.to_string())),
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A resting limit order.
///
/// `size` is the remaining unfilled quantity. It is signed: the core accepts
/// whatever the caller submits and the matching arithmetic is carried out
/// as-is, so negative sizes produce negative trades rather than a panic.
/// Use [`Order::validate`] (or [`crate::OrderBook::try_add_order`]) to reject
/// such input up front.
///
/// ## Example
///
/// ```
/// use crossbook::types::{Order, Side};
///
/// let order = Order::new(3.0, 300, Side::Buy);
/// assert_eq!(order.to_string(), "3.00-300-buy");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Order {
    /// Limit price
    pub price: f64,

    /// Remaining quantity, reduced as the order is matched
    pub size: i64,

    /// Buy or Sell
    pub side: Side,
}

impl Order {
    /// Create a new order
    pub fn new(price: f64, size: i64, side: Side) -> Self {
        Self { price, size, side }
    }

    /// Create a buy order
    pub fn buy(price: f64, size: i64) -> Self {
        Self::new(price, size, Side::Buy)
    }

    /// Create a sell order
    pub fn sell(price: f64, size: i64) -> Self {
        Self::new(price, size, Side::Sell)
    }

    /// Check if the order has no remaining quantity
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.size == 0
    }

    /// Check whether this order and `other` cross.
    ///
    /// Orders on the same side never cross. NaN prices never cross.
    ///
    /// ```
    /// use crossbook::types::Order;
    ///
    /// assert!(Order::buy(3.0, 1).crosses(&Order::sell(2.0, 1)));
    /// assert!(Order::sell(2.0, 1).crosses(&Order::buy(2.0, 1)));
    /// assert!(!Order::buy(1.0, 1).crosses(&Order::sell(2.0, 1)));
    /// ```
    pub fn crosses(&self, other: &Order) -> bool {
        match (self.side, other.side) {
            (Side::Buy, Side::Sell) => self.price >= other.price,
            (Side::Sell, Side::Buy) => other.price >= self.price,
            _ => false,
        }
    }

    /// Reduce the remaining size by `quantity`.
    ///
    /// No clamping is applied; callers pass `min(ask, bid)`. Arithmetic
    /// wraps rather than panicking on extreme negative input.
    #[inline]
    pub fn fill(&mut self, quantity: i64) {
        self.size = self.size.wrapping_sub(quantity);
    }

    /// Reject orders the core would otherwise accept silently
    ///
    /// # Errors
    ///
    /// * [`OrderError::NonFinitePrice`] - price is NaN or infinite
    /// * [`OrderError::NegativePrice`] - price below zero
    /// * [`OrderError::NegativeSize`] - size below zero
    pub fn validate(&self) -> Result<()> {
        if !self.price.is_finite() {
            return Err(OrderError::NonFinitePrice(self.price));
        }
        if self.price < 0.0 {
            return Err(OrderError::NegativePrice(self.price));
        }
        if self.size < 0 {
            return Err(OrderError::NegativeSize(self.size));
        }
        Ok(())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", format_price(self.price), self.size, self.side)
    }
}

impl FromStr for Order {
    type Err = OrderError;

    /// Parse `price-size-side`.
    ///
    /// A leading `-` belongs to the price, so `-1.00-5-buy` parses as a
    /// negative price.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let mut parts = text.rsplitn(3, '-');
        let (side, size, price) = match (parts.next(), parts.next(), parts.next()) {
            (Some(side), Some(size), Some(price)) if !price.is_empty() => (side, size, price),
            _ => return Err(OrderError::Malformed(s.to_string())),
        };

        let side: Side = side.parse()?;
        let size: i64 = size
            .parse()
            .map_err(|_| OrderError::InvalidSize(size.to_string()))?;
        let price = parse_price(price)?;

        Ok(Order::new(price, size, side))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
