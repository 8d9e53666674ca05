//! Price formatting
//!
//! The console and CSV reports format prices differently:
//! - console: natural form, whole values keep a `.0` (`75.0`, `999.99`)
//! - CSV: exactly two decimals, rounded half-up (`75.00`, `123.46`)

use crate::types::Price;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Natural string form of a price
///
/// Shortest round-trip representation, with `.0` kept on whole values.
pub fn natural_price(price: Price) -> String {
    // Debug keeps the trailing ".0" that Display drops
    format!("{:?}", price)
}

/// Price rounded to exactly two decimal places
///
/// Rounds half-up on the shortest decimal form of the value, so `2.675`
/// becomes `2.68` even though its binary value sits just below the midpoint.
/// Values that do not fit a `Decimal` (non-finite or huge) fall back to the
/// float formatter.
pub fn two_decimal_price(price: Price) -> String {
    match Decimal::from_str(&price.to_string()) {
        Ok(decimal) => format!(
            "{:.2}",
            decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        Err(_) => format!("{:.2}", price),
    }
}
