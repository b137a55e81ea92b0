//! Presentation-only rendering of numeric results.
//!
//! en-US conventions: comma thousands grouping, point decimal separator.
//! No business logic lives here.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places used for currency rendering.
const CURRENCY_DECIMALS: u32 = 2;

/// Format a value with a fixed number of decimal places and thousands
/// grouping, e.g. `265000` with 2 decimals renders as `265,000.00`.
#[must_use]
pub fn format_number(value: Decimal, decimals: u32) -> String {
    let rounded =
        value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    group_thousands(&format!("{rounded:.prec$}", prec = decimals as usize))
}

/// Format a value as a currency string, always with two decimal places.
///
/// Known codes render with their symbol (`$`, `€`, `£`); anything else
/// falls back to `CODE 1,234.56`. Negative amounts carry a leading minus.
#[must_use]
pub fn format_currency(value: Decimal, currency: &str) -> String {
    let rounded =
        value.round_dp_with_strategy(CURRENCY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let amount = format_number(rounded.abs(), CURRENCY_DECIMALS);
    match currency {
        "USD" => format!("{sign}${amount}"),
        "EUR" => format!("{sign}€{amount}"),
        "GBP" => format!("{sign}£{amount}"),
        _ => format!("{sign}{currency} {amount}"),
    }
}

/// Insert comma separators into the integer part of a plain decimal string.
fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = text
        .strip_prefix('-')
        .map_or(("", text), |rest| ("-", rest));
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(unsigned.len() + unsigned.len() / 3);
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
