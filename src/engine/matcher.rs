//! Price-crossing match pass.
//!
//! ## Algorithm
//!
//! A cursor walks `asks` from the best (lowest) price. At each position only
//! the current best bid is compared with the ask under the cursor:
//!
//! - **Crossing** (`bid.price >= ask.price`): trade `min(ask.size, bid.size)`
//!   at the ask's price, reduce both orders and drop whichever reached zero.
//!   If the ask was dropped, the next ask slides under the cursor and is tried
//!   against the new best bid. Otherwise the cursor moves on, leaving the
//!   partially filled ask behind for this pass.
//! - **Not crossing**: the cursor moves on.
//!
//! Because a partially filled ask is never retried against the next bid in
//! the same pass, a book can still be crossed after [`MatchingEngine::run`]
//! returns. A later pass picks the remainder up.

use tracing::{debug, info};

use crate::orderbook::OrderBook;
use crate::types::{MatchReceipt, Trade};

// ============================================================================
// Trade listener
// ============================================================================

/// Receives trades as a match pass executes them.
///
/// Any `FnMut(&Trade)` closure is a listener, and so is `Vec<Trade>`, which
/// collects every trade it is handed.
pub trait TradeListener {
    /// Called once per executed trade, in execution order
    fn on_trade(&mut self, trade: &Trade);
}

impl<F> TradeListener for F
where
    F: FnMut(&Trade),
{
    fn on_trade(&mut self, trade: &Trade) {
        self(trade)
    }
}

impl TradeListener for Vec<Trade> {
    fn on_trade(&mut self, trade: &Trade) {
        self.push(*trade);
    }
}

// ============================================================================
// Match result
// ============================================================================

/// Outcome of a single match pass
#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    /// Trades in the order they executed
    pub trades: Vec<Trade>,

    /// Pass summary and resulting state root
    pub receipt: MatchReceipt,
}

// ============================================================================
// Matching engine
// ============================================================================

/// Runs match passes over an [`OrderBook`].
///
/// The engine itself only counts passes; all order state lives in the book.
#[derive(Debug, Default)]
pub struct MatchingEngine {
    passes: u64,
}

impl MatchingEngine {
    /// Create a new matching engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of passes run so far
    #[inline]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Run one match pass over `book`, handing each trade to `listener`
    ///
    /// # Example
    ///
    /// ```
    /// use crossbook::{MatchingEngine, OrderBook, Order, Trade};
    ///
    /// let mut book = OrderBook::new();
    /// book.add_order(Order::buy(3.0, 300));
    /// book.add_order(Order::sell(2.0, 200));
    ///
    /// let mut seen = Vec::new();
    /// let mut engine = MatchingEngine::new();
    /// let result = engine.run(&mut book, &mut |t: &Trade| seen.push(t.to_string()));
    ///
    /// assert_eq!(seen, vec!["Match: 200 @ 2.00"]);
    /// assert_eq!(result.receipt.volume, 200);
    /// assert_eq!(result.receipt.bids_remaining, 1);
    /// ```
    pub fn run<L>(&mut self, book: &mut OrderBook, listener: &mut L) -> MatchResult
    where
        L: TradeListener + ?Sized,
    {
        self.passes += 1;

        let (bids, asks) = book.sides_mut();
        let mut trades = Vec::new();
        let mut cursor = 0;

        while cursor < asks.len() {
            // Bids only shrink during a pass; nothing left can trade.
            let Some(bid) = bids.first_mut() else {
                break;
            };
            let ask = &mut asks[cursor];

            let crosses = bid.price >= ask.price;
            if !crosses {
                cursor += 1;
                continue;
            }

            let size = ask.size.min(bid.size);
            let trade = Trade::new(size, ask.price);
            debug!(%bid, %ask, size, price = trade.price, "trade");

            ask.fill(size);
            bid.fill(size);
            let ask_filled = ask.is_filled();
            let bid_filled = bid.is_filled();

            listener.on_trade(&trade);
            trades.push(trade);

            if ask_filled {
                asks.remove(cursor);
            } else {
                cursor += 1;
            }
            if bid_filled {
                bids.remove(0);
            }
        }

        let volume = trades
            .iter()
            .fold(0i64, |total, trade| total.wrapping_add(trade.size));
        let receipt = MatchReceipt::new(
            self.passes,
            trades.len() as u64,
            volume,
            book.bid_count() as u64,
            book.ask_count() as u64,
            book.state_root(),
        );

        info!(
            pass = receipt.pass,
            trades = receipt.trades_executed,
            volume = receipt.volume,
            bids = receipt.bids_remaining,
            asks = receipt.asks_remaining,
            "match pass complete"
        );

        MatchResult { trades, receipt }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Order;

    fn book_of(orders: &[Order]) -> OrderBook {
        let mut book = OrderBook::new();
        for order in orders {
            book.add_order(*order);
        }
        book
    }

    #[test]
    fn test_engine_new() {
        let engine = MatchingEngine::new();
        assert_eq!(engine.passes(), 0);
    }

    #[test]
    fn test_empty_book() {
        let mut book = OrderBook::new();
        let mut engine = MatchingEngine::new();

        let result = engine.run(&mut book, &mut Vec::<Trade>::new());

        assert!(result.trades.is_empty());
        assert!(result.receipt.is_empty());
        assert_eq!(result.receipt.pass, 1);
        assert_eq!(engine.passes(), 1);
    }

    #[test]
    fn test_one_sided_book() {
        let mut book = book_of(&[Order::sell(1.0, 10), Order::sell(2.0, 10)]);

        let trades = book.match_orders();

        assert!(trades.is_empty());
        assert_eq!(book.ask_count(), 2);
    }

    #[test]
    fn test_exact_fill_removes_both() {
        let mut book = book_of(&[Order::buy(2.0, 50), Order::sell(2.0, 50)]);

        let trades = book.match_orders();

        assert_eq!(trades, vec![Trade::new(50, 2.0)]);
        assert!(book.is_empty());
    }

    #[test]
    fn test_trade_prices_at_ask() {
        let mut book = book_of(&[Order::buy(9.0, 10), Order::sell(4.0, 10)]);

        let trades = book.match_orders();

        assert_eq!(trades[0].price, 4.0);
    }

    #[test]
    fn test_filled_ask_retried_against_next_bid() {
        // Ask 1.00x50 fills against bid 3.00x50 (both removed), then the
        // next ask takes the cursor and meets bid 2.00.
        let mut book = book_of(&[
            Order::buy(3.0, 50),
            Order::buy(2.0, 50),
            Order::sell(1.0, 50),
            Order::sell(1.5, 50),
        ]);

        let trades = book.match_orders();

        assert_eq!(trades, vec![Trade::new(50, 1.0), Trade::new(50, 1.5)]);
        assert!(book.is_empty());
    }

    #[test]
    fn test_listener_sees_trades_in_order() {
        let mut book = book_of(&[
            Order::buy(3.0, 300),
            Order::buy(2.0, 200),
            Order::sell(2.0, 200),
            Order::sell(3.0, 300),
        ]);
        let mut engine = MatchingEngine::new();
        let mut collected: Vec<Trade> = Vec::new();

        let result = engine.run(&mut book, &mut collected);

        assert_eq!(collected, result.trades);
        assert_eq!(collected, vec![Trade::new(200, 2.0), Trade::new(100, 3.0)]);
    }

    #[test]
    fn test_receipt_matches_book() {
        let mut book = book_of(&[Order::buy(3.0, 300), Order::sell(2.0, 200)]);
        let mut engine = MatchingEngine::new();

        let result = engine.run(&mut book, &mut Vec::<Trade>::new());

        assert_eq!(result.receipt.trades_executed, 1);
        assert_eq!(result.receipt.volume, 200);
        assert_eq!(result.receipt.bids_remaining, 1);
        assert_eq!(result.receipt.asks_remaining, 0);
        assert_eq!(result.receipt.state_root, book.state_root());
    }

    #[test]
    fn test_pass_counter() {
        let mut book = OrderBook::new();
        let mut engine = MatchingEngine::new();

        engine.run(&mut book, &mut Vec::<Trade>::new());
        let result = engine.run(&mut book, &mut Vec::<Trade>::new());

        assert_eq!(result.receipt.pass, 2);
        assert_eq!(engine.passes(), 2);
    }

    #[test]
    fn test_nan_never_crosses() {
        let mut book = book_of(&[Order::buy(f64::NAN, 10), Order::sell(1.0, 10)]);

        let trades = book.match_orders();

        assert!(trades.is_empty());
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_negative_size_arithmetic() {
        // No guarding: min(-5, 10) trades -5, the ask reaches zero and goes,
        // the bid grows to 15.
        let mut book = book_of(&[Order::buy(2.0, 10), Order::sell(1.0, -5)]);

        let trades = book.match_orders();

        assert_eq!(trades, vec![Trade::new(-5, 1.0)]);
        assert_eq!(book.asks(), &[] as &[Order]);
        assert_eq!(book.bids(), &[Order::buy(2.0, 15)]);
    }

    #[test]
    fn test_zero_size_orders_trade_zero() {
        let mut book = book_of(&[Order::buy(2.0, 0), Order::sell(1.0, 10)]);

        let trades = book.match_orders();

        assert_eq!(trades, vec![Trade::new(0, 1.0)]);
        assert_eq!(book.asks(), &[Order::sell(1.0, 10)]);
        assert!(book.bids().is_empty());
    }
}
