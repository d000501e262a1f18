//! Core data types for crossbook
//!
//! ## Types
//!
//! - [`Order`]: A resting limit order
//! - [`Side`]: Buy or Sell
//! - [`Trade`]: An executed match between a bid and an ask
//! - [`MatchReceipt`]: Summary of one match pass
//!
//! Prices are `f64`, sizes are `i64`. See [`price`] for the text and
//! decimal conversions.

mod order;
mod trade;
mod receipt;
pub mod price;

// Re-export all types at module level
pub use order::{Order, Side};
pub use trade::Trade;
pub use receipt::MatchReceipt;
