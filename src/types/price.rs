//! Price parsing, formatting and notional values.
//!
//! ## Overview
//!
//! Prices live in the book as `f64` and are compared with ordinary
//! floating-point semantics. Text crossing the crate boundary goes through
//! `rust_decimal` so that `"2.10"` parses to the nearest `f64` of the exact
//! decimal, and so that notional values (`size * price`) are reported to the
//! cent without accumulating binary rounding noise.
//!
//! ## Examples
//!
//! ```
//! use crossbook::types::price::{parse_price, format_price};
//!
//! let price = parse_price("50000.25").unwrap();
//! assert_eq!(format_price(price), "50000.25");
//! ```

use std::str::FromStr;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::error::{OrderError, Result};

/// Decimal places used when rendering prices
pub const PRICE_DECIMALS: u32 = 2;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Parse a decimal string into a price
///
/// # Example
///
/// ```
/// use crossbook::types::price::parse_price;
///
/// assert_eq!(parse_price("2.00"), Ok(2.0));
/// assert!(parse_price("two").is_err());
/// ```
pub fn parse_price(s: &str) -> Result<f64> {
    let decimal =
        Decimal::from_str(s.trim()).map_err(|_| OrderError::InvalidPrice(s.to_string()))?;
    decimal
        .to_f64()
        .ok_or_else(|| OrderError::InvalidPrice(s.to_string()))
}

/// Render a price with two decimal places
///
/// # Example
///
/// ```
/// use crossbook::types::price::format_price;
///
/// assert_eq!(format_price(3.0), "3.00");
/// assert_eq!(format_price(1.5), "1.50");
/// ```
pub fn format_price(price: f64) -> String {
    format!("{:.*}", PRICE_DECIMALS as usize, price)
}

/// Convert a price to a Decimal
///
/// Returns `None` for NaN and infinities.
pub fn price_to_decimal(price: f64) -> Option<Decimal> {
    Decimal::from_f64(price)
}

// ============================================================================
// Arithmetic Functions
// ============================================================================

/// Notional value of `size` units at `price`, rounded to the cent
///
/// # Returns
///
/// * `Some(Decimal)` - `size * price` with two decimal places
/// * `None` - If the price is not finite or the product overflows
///
/// # Example
///
/// ```
/// use crossbook::types::price::notional;
/// use rust_decimal::Decimal;
///
/// assert_eq!(notional(200, 2.0), Some(Decimal::new(40000, 2)));
/// ```
pub fn notional(size: i64, price: f64) -> Option<Decimal> {
    let price = price_to_decimal(price)?;
    Decimal::from(size)
        .checked_mul(price)
        .map(|value| value.round_dp(PRICE_DECIMALS))
}

// ============================================================================
// Unit Tests
// ============================================================================
