//! Order book module for crossbook.
//!
//! ## Architecture
//!
//! The book keeps each side as a plain `Vec<Order>` held in price priority:
//!
//! - **Bids**: highest price first
//! - **Asks**: lowest price first
//!
//! Admission appends and re-sorts the affected side. There is no time
//! priority: orders at equal prices have no defined relative order.
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Add order | O(n log n) |
//! | Best bid/ask | O(1) |
//! | Match pass | O(n * m) worst case |
//!
//! ## Example
//!
//! ```
//! use crossbook::orderbook::OrderBook;
//! use crossbook::types::Order;
//!
//! let mut book = OrderBook::new();
//! book.add_order(Order::buy(50_000.0, 1));
//!
//! assert_eq!(book.best_bid(), Some(50_000.0));
//! ```

pub mod book;

pub use book::OrderBook;
