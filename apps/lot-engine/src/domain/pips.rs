//! Conversion between raw price distance and pip units.
//!
//! Pure numeric transforms. The pip-to-price scale is fixed per instrument
//! (see [`PipScale`](crate::domain::instrument::PipScale)) and never zero,
//! so the inverse conversion cannot divide by zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::instrument::Instrument;

/// Direction of the trade being sized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    /// Long entry; the stop loss sits below the entry price.
    #[default]
    Buy,
    /// Short entry; the stop loss sits above the entry price.
    Sell,
}

/// Distance between two prices, expressed in pips for the instrument.
///
/// Symmetric under swapping the two prices.
#[must_use]
pub fn pip_distance(entry_price: Decimal, stop_loss: Decimal, instrument: &Instrument) -> Decimal {
    (entry_price - stop_loss).abs() * instrument.pip_scale.pips_per_point()
}

/// Stop loss price implied by a pip distance from the entry price.
///
/// Buy orders place the stop below the entry, sell orders above it.
#[must_use]
pub fn price_from_pips(
    entry_price: Decimal,
    pip_distance: Decimal,
    instrument: &Instrument,
    side: TradeSide,
) -> Decimal {
    let price_distance = pip_distance / instrument.pip_scale.pips_per_point();
    match side {
        TradeSide::Buy => entry_price - price_distance,
        TradeSide::Sell => entry_price + price_distance,
    }
}
