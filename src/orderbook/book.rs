//! Two-sided order book with price priority.
//!
//! ## Price Ordering
//!
//! - **Bids** (buy orders): Sorted high-to-low (best bid = highest price)
//! - **Asks** (sell orders): Sorted low-to-high (best ask = lowest price)
//!
//! Orders at equal prices carry no defined relative order; admission appends
//! and then re-sorts the affected side with an unstable sort.
//!
//! ## Example
//!
//! ```
//! use crossbook::orderbook::OrderBook;
//! use crossbook::types::Order;
//!
//! let mut book = OrderBook::new();
//! book.add_order(Order::buy(3.0, 300));
//! book.add_order(Order::sell(2.0, 200));
//!
//! let trades = book.match_orders();
//! assert_eq!(trades.len(), 1);
//! assert_eq!(book.to_string(), "Bids: [3.00-100-buy]\nAsks: []");
//! ```

use std::fmt;

use tracing::{debug, warn};

use crate::engine::MatchingEngine;
use crate::error::Result;
use crate::types::{MatchReceipt, Order, Side, Trade};

/// Order book holding resting bids and asks
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    /// Buy orders, best (highest) price first
    bids: Vec<Order>,

    /// Sell orders, best (lowest) price first
    asks: Vec<Order>,
}

impl OrderBook {
    /// Create a new empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a book with room for `capacity` orders on each side
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bids: Vec::with_capacity(capacity),
            asks: Vec::with_capacity(capacity),
        }
    }

    // ========================================================================
    // Admission
    // ========================================================================

    /// Add an order to the book
    ///
    /// The order joins `bids` or `asks` according to its side and that side
    /// is re-sorted. Nothing is validated; see [`OrderBook::try_add_order`].
    pub fn add_order(&mut self, order: Order) {
        debug!(%order, "admitting order");
        match order.side {
            Side::Buy => {
                self.bids.push(order);
                self.bids.sort_unstable_by(|a, b| b.price.total_cmp(&a.price));
            }
            Side::Sell => {
                self.asks.push(order);
                self.asks.sort_unstable_by(|a, b| a.price.total_cmp(&b.price));
            }
        }
    }

    /// Validate an order and add it to the book
    ///
    /// # Errors
    ///
    /// Returns the [`Order::validate`] error and leaves the book untouched
    /// if the order has a non-finite or negative price or a negative size.
    ///
    /// ```
    /// use crossbook::orderbook::OrderBook;
    /// use crossbook::types::Order;
    ///
    /// let mut book = OrderBook::new();
    /// assert!(book.try_add_order(Order::buy(1.0, -5)).is_err());
    /// assert!(book.is_empty());
    /// ```
    pub fn try_add_order(&mut self, order: Order) -> Result<()> {
        if let Err(err) = order.validate() {
            warn!(%order, error = %err, "rejecting order");
            return Err(err);
        }
        self.add_order(order);
        Ok(())
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Run one match pass and return the trades in execution order
    ///
    /// See [`MatchingEngine::run`] for the pass semantics and for the
    /// listener/receipt form.
    pub fn match_orders(&mut self) -> Vec<Trade> {
        MatchingEngine::new().run(self, &mut |_: &Trade| {}).trades
    }

    /// Mutable access to both sides, for the matching engine
    pub(crate) fn sides_mut(&mut self) -> (&mut Vec<Order>, &mut Vec<Order>) {
        (&mut self.bids, &mut self.asks)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Resting bids, best first
    #[inline]
    pub fn bids(&self) -> &[Order] {
        &self.bids
    }

    /// Resting asks, best first
    #[inline]
    pub fn asks(&self) -> &[Order] {
        &self.asks
    }

    /// Number of resting bids
    #[inline]
    pub fn bid_count(&self) -> usize {
        self.bids.len()
    }

    /// Number of resting asks
    #[inline]
    pub fn ask_count(&self) -> usize {
        self.asks.len()
    }

    /// Total number of resting orders
    #[inline]
    pub fn len(&self) -> usize {
        self.bids.len() + self.asks.len()
    }

    /// Check if the book holds no orders
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Highest bid price
    pub fn best_bid(&self) -> Option<f64> {
        self.bids.first().map(|order| order.price)
    }

    /// Lowest ask price
    pub fn best_ask(&self) -> Option<f64> {
        self.asks.first().map(|order| order.price)
    }

    /// Get the spread (best_ask - best_bid)
    ///
    /// Negative when the book is crossed; `None` if either side is empty.
    pub fn spread(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Check whether the best bid crosses the best ask
    pub fn is_crossed(&self) -> bool {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => bid >= ask,
            _ => false,
        }
    }

    /// SHA-256 of the book rendering
    pub fn state_root(&self) -> [u8; 32] {
        MatchReceipt::compute_hash(self.to_string().as_bytes())
    }

    /// Remove all orders from the book
    pub fn clear(&mut self) {
        self.bids.clear();
        self.asks.clear();
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, orders: &[Order]) -> fmt::Result {
    f.write_str("[")?;
    for (i, order) in orders.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", order)?;
    }
    f.write_str("]")
}

impl fmt::Display for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bids: ")?;
        write_side(f, &self.bids)?;
        f.write_str("\nAsks: ")?;
        write_side(f, &self.asks)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
