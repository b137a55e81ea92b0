//! Core lot size calculation logic.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::pips;

use super::types::{SizingRequest, SizingResult};
use super::validation::{self, RuleViolation};

/// Output precision for monetary and pip figures.
const OUTPUT_DECIMALS: u32 = 2;

/// Lot sizer implementing deterministic risk-based sizing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LotSizer;

impl LotSizer {
    /// Create a new lot sizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Calculate the recommended lot size for the request.
    ///
    /// Always returns a result: failed validation is reported through
    /// [`SizingResult::errors`]. When only the distance inputs are
    /// defective, the risk amount is still reported so the caller can
    /// display it.
    #[must_use]
    pub fn calculate(&self, request: &SizingRequest<'_>) -> SizingResult {
        let violations = validation::validate(request);
        if !violations.is_empty() {
            let risk_amount = Self::partial_risk_amount(request, &violations);
            return SizingResult::invalid(violations, risk_amount);
        }

        let instrument = request.instrument;
        let risk_amount = Self::risk_amount(request);
        let pip_distance = pips::pip_distance(request.entry_price, request.stop_loss, instrument);

        // Validation already rejects equal prices; guard the division anyway.
        if pip_distance.is_zero() {
            return SizingResult::invalid(
                vec![RuleViolation::InvalidPriceDifference],
                round_output(risk_amount),
            );
        }

        // Risk = lots x pip value x pip distance, solved for lots.
        let raw_lot_size = risk_amount / (instrument.pip_value_per_lot * pip_distance);

        // Step-round first, cap at the maximum, then raise to the minimum.
        // Raising to the broker minimum can push realized risk above the
        // requested amount; known over-risk edge case, kept on purpose.
        let lot_size = round_to_lot_step(raw_lot_size, instrument.lot_step)
            .min(instrument.max_lot_size)
            .max(instrument.min_lot_size);

        let pip_value = lot_size * instrument.pip_value_per_lot;
        let position_notional = lot_size * instrument.contract_size * request.entry_price;

        SizingResult {
            lot_size: round_output(lot_size),
            position_notional: round_output(position_notional),
            risk_amount: round_output(risk_amount),
            pip_value: round_output(pip_value),
            pip_distance: round_output(pip_distance),
            is_valid: true,
            errors: Vec::new(),
        }
    }

    fn risk_amount(request: &SizingRequest<'_>) -> Decimal {
        request.account_balance * request.risk_percentage / Decimal::ONE_HUNDRED
    }

    /// Risk amount for an invalid request: reported when the balance and
    /// percentage were themselves valid, zero otherwise.
    fn partial_risk_amount(request: &SizingRequest<'_>, violations: &[RuleViolation]) -> Decimal {
        let computable = !violations.contains(&RuleViolation::NonPositiveBalance)
            && !violations.contains(&RuleViolation::RiskPercentageOutOfRange);
        if computable {
            round_output(Self::risk_amount(request))
        } else {
            Decimal::ZERO
        }
    }
}

/// Round to the nearest multiple of the lot step, half away from zero on
/// the step count.
fn round_to_lot_step(raw: Decimal, lot_step: Decimal) -> Decimal {
    let steps = (raw / lot_step).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    steps * lot_step
}

/// Round an output figure to two decimal places, half away from zero.
fn round_output(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(OUTPUT_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}
