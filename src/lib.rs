//! # crossbook
//!
//! Minimal continuous double-auction order book.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (Order, Side, Trade, MatchReceipt)
//! - **OrderBook**: Price-sorted bids and asks
//! - **Engine**: Price-crossing match pass with trade listeners
//!
//! ## Design Principles
//!
//! 1. **Price priority only**: no time priority, no order identifiers
//! 2. **Infallible core**: admission and matching never fail; validation is opt-in
//! 3. **Synchronous**: `&mut self` on every mutation, no internal locking
//!
//! ## Example
//!
//! ```
//! use crossbook::{Order, OrderBook};
//!
//! let mut book = OrderBook::new();
//! book.add_order(Order::buy(3.0, 300));
//! book.add_order(Order::sell(2.0, 200));
//!
//! for trade in book.match_orders() {
//!     println!("{trade}");
//! }
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Order, Trade, MatchReceipt
pub mod types;

/// Order book: price-sorted bids and asks
pub mod orderbook;

/// Matching engine: price-crossing match pass
pub mod engine;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{MatchReceipt, Order, Side, Trade};
pub use orderbook::OrderBook;
pub use engine::{MatchResult, MatchingEngine, TradeListener};
pub use error::{OrderError, Result};
