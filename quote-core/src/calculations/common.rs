//! Common utility functions for price calculations.
//!
//! This module provides shared functionality used by the total, the line
//! items and the exported document: amount parsing, rounding and currency
//! display.

use rust_decimal::Decimal;
use tracing::debug;

/// Parses a configured option value into an amount.
///
/// Whitespace is trimmed and commas are treated as thousands separators.
/// Plain and scientific notation are accepted. Empty or unparsable input
/// yields zero. Negative values are kept as-is so they reduce a total.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::parse_amount;
///
/// assert_eq!(parse_amount("1,250.50"), dec!(1250.50));
/// assert_eq!(parse_amount("-25"), dec!(-25));
/// assert_eq!(parse_amount("abc"), Decimal::ZERO);
/// assert_eq!(parse_amount(""), Decimal::ZERO);
/// ```
pub fn parse_amount(raw: &str) -> Decimal {
    let normalized = raw.trim().replace(',', "");
    if normalized.is_empty() {
        return Decimal::ZERO;
    }

    normalized
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(&normalized))
        .unwrap_or_else(|e| {
            debug!(input = %raw, "unparsable amount treated as zero: {}", e);
            Decimal::ZERO
        })
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as dollars with thousands separators and two decimals.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::format_money;
///
/// assert_eq!(format_money(dec!(1234.5)), "$1,234.50");
/// assert_eq!(format_money(dec!(-50)), "-$50.00");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}${}.{fraction}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
