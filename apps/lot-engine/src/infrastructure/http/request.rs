//! HTTP request DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::pips::TradeSide;

/// Distance input mode for a calculation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Explicit entry and stop loss prices.
    #[default]
    Price,
    /// Stop distance in pips; the price pair is synthesized from the
    /// instrument's reference price.
    Pips,
}

/// Request to calculate a lot size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// Instrument identifier, e.g. "XAUUSD".
    pub instrument_id: String,
    /// Account balance in account currency.
    pub account_balance: Decimal,
    /// Risk percentage in percent points.
    pub risk_percentage: Decimal,
    /// Distance input mode.
    #[serde(default)]
    pub mode: InputMode,
    /// Entry price (price mode).
    #[serde(default)]
    pub entry_price: Option<Decimal>,
    /// Stop loss price (price mode).
    #[serde(default)]
    pub stop_loss: Option<Decimal>,
    /// Stop distance in pips (pips mode).
    #[serde(default)]
    pub pip_distance: Option<Decimal>,
    /// Trade direction (pips mode). Defaults to buy.
    #[serde(default)]
    pub side: TradeSide,
}
