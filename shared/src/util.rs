//! Price parsing and formatting
//!
//! Prices travel as decimal strings ("6.00"); arithmetic goes through
//! `rust_decimal::Decimal` to avoid float rounding drift in totals.

use rust_decimal::Decimal;

/// Parse a decimal price string, treating anything unparsable as zero.
pub fn parse_price(price: &str) -> Decimal {
    price.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Format an amount with exactly two fractional digits.
pub fn format_price(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}
