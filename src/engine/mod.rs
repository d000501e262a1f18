//! Matching engine module for crossbook.
//!
//! ## Matching Rules
//!
//! - Asks are scanned from the lowest price; each is tried against the
//!   current best bid only
//! - A crossing pair trades `min(ask.size, bid.size)` at the **ask's** price
//! - Orders reaching zero size leave the book; partial fills stay
//! - One pass does not guarantee an uncrossed book (see [`matcher`])
//!
//! ## Example
//!
//! ```
//! use crossbook::engine::MatchingEngine;
//! use crossbook::orderbook::OrderBook;
//! use crossbook::types::{Order, Trade};
//!
//! let mut book = OrderBook::new();
//! let mut engine = MatchingEngine::new();
//!
//! book.add_order(Order::sell(2.0, 200));
//! book.add_order(Order::buy(3.0, 300));
//!
//! let mut trades: Vec<Trade> = Vec::new();
//! let result = engine.run(&mut book, &mut trades);
//!
//! assert_eq!(result.trades.len(), 1);
//! assert_eq!(trades[0], Trade::new(200, 2.0));
//! ```

pub mod matcher;

pub use matcher::{MatchResult, MatchingEngine, TradeListener};
