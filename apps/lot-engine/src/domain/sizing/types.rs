//! Core types for lot size calculations.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::instrument::Instrument;
use crate::domain::pips::{self, TradeSide};

use super::validation::RuleViolation;

/// Input parameters for one lot size calculation.
///
/// The instrument is borrowed: it is shared, static metadata, never owned
/// by the request.
#[derive(Debug, Clone)]
pub struct SizingRequest<'a> {
    /// Account balance in account currency.
    pub account_balance: Decimal,
    /// Share of the balance to risk, in percent points (0, 100].
    pub risk_percentage: Decimal,
    /// Planned entry price.
    pub entry_price: Decimal,
    /// Planned stop loss price.
    pub stop_loss: Decimal,
    /// Instrument being traded.
    pub instrument: &'a Instrument,
}

impl<'a> SizingRequest<'a> {
    /// Build a request from an explicit entry/stop price pair.
    #[must_use]
    pub fn from_prices(
        account_balance: Decimal,
        risk_percentage: Decimal,
        entry_price: Decimal,
        stop_loss: Decimal,
        instrument: &'a Instrument,
    ) -> Self {
        Self {
            account_balance,
            risk_percentage,
            entry_price,
            stop_loss,
            instrument,
        }
    }

    /// Build a request from a stop distance in pips.
    ///
    /// The calculator always works from a resolved price pair, so the pair
    /// is synthesized here: the instrument's reference price stands in for
    /// the entry and the stop loss is derived from the pip distance.
    #[must_use]
    pub fn from_pip_distance(
        account_balance: Decimal,
        risk_percentage: Decimal,
        pip_distance: Decimal,
        side: TradeSide,
        instrument: &'a Instrument,
    ) -> Self {
        let entry_price = instrument.reference_price;
        let stop_loss = pips::price_from_pips(entry_price, pip_distance, instrument, side);
        Self {
            account_balance,
            risk_percentage,
            entry_price,
            stop_loss,
            instrument,
        }
    }
}

/// Outcome of one lot size calculation.
///
/// Always produced, never thrown: failed validation is reported through
/// `errors` so the caller can still render partial information.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingResult {
    /// Lot size rounded to the instrument's tradable granularity.
    pub lot_size: Decimal,
    /// Total monetary exposure: lot size x contract size x entry price.
    pub position_notional: Decimal,
    /// Monetary amount at risk if the stop loss is hit.
    pub risk_amount: Decimal,
    /// Monetary value of a one-pip move for the sized position.
    pub pip_value: Decimal,
    /// Entry-to-stop distance in pips.
    pub pip_distance: Decimal,
    /// Whether the inputs passed validation.
    pub is_valid: bool,
    /// Violated rules in evaluation order. Empty iff `is_valid`.
    pub errors: Vec<RuleViolation>,
}

impl SizingResult {
    /// Human-readable messages for the violated rules.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Result for a request that failed validation.
    ///
    /// All derived fields are zeroed except the risk amount, which is
    /// reported when it could be computed from the balance and percentage
    /// alone.
    pub(crate) fn invalid(errors: Vec<RuleViolation>, risk_amount: Decimal) -> Self {
        Self {
            lot_size: Decimal::ZERO,
            position_notional: Decimal::ZERO,
            risk_amount,
            pip_value: Decimal::ZERO,
            pip_distance: Decimal::ZERO,
            is_valid: false,
            errors,
        }
    }
}
