//! Parameter validation for lot size calculations.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::types::SizingRequest;

/// A violated validation rule.
///
/// The Display strings are the user-facing messages; serialization uses
/// them too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// Account balance was zero or negative.
    #[error("Account balance must be greater than 0")]
    NonPositiveBalance,
    /// Risk percentage was outside (0, 100].
    #[error("Risk percentage must be between 0 and 100")]
    RiskPercentageOutOfRange,
    /// Entry price was zero or negative.
    #[error("Entry price must be greater than 0")]
    NonPositiveEntryPrice,
    /// Stop loss was zero or negative.
    #[error("Stop loss must be greater than 0")]
    NonPositiveStopLoss,
    /// Entry price and stop loss were identical.
    #[error("Entry price and stop loss cannot be the same")]
    EqualEntryAndStop,
    /// Entry-to-stop distance evaluated to zero pips.
    #[error("Invalid price difference")]
    InvalidPriceDifference,
}

impl Serialize for RuleViolation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Evaluate every rule against the request.
///
/// Rules are independent and never short-circuited, so the returned list
/// names each violated rule in evaluation order.
#[must_use]
pub fn validate(request: &SizingRequest<'_>) -> Vec<RuleViolation> {
    let mut violations = Vec::new();

    if request.account_balance <= Decimal::ZERO {
        violations.push(RuleViolation::NonPositiveBalance);
    }
    if request.risk_percentage <= Decimal::ZERO || request.risk_percentage > Decimal::ONE_HUNDRED {
        violations.push(RuleViolation::RiskPercentageOutOfRange);
    }
    if request.entry_price <= Decimal::ZERO {
        violations.push(RuleViolation::NonPositiveEntryPrice);
    }
    if request.stop_loss <= Decimal::ZERO {
        violations.push(RuleViolation::NonPositiveStopLoss);
    }
    if request.entry_price == request.stop_loss {
        violations.push(RuleViolation::EqualEntryAndStop);
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instrument::{Instrument, InstrumentRegistry};
    use rust_decimal_macros::dec;

    fn request(instrument: &Instrument) -> SizingRequest<'_> {
        SizingRequest::from_prices(dec!(10000), dec!(2), dec!(2650), dec!(2630), instrument)
    }

    #[test]
    fn valid_request_has_no_violations() {
        let registry = InstrumentRegistry::builtin();
        let gold = registry.get("XAUUSD").unwrap();
        assert!(validate(&request(gold)).is_empty());
    }

    #[test]
    fn risk_percentage_upper_bound_is_inclusive() {
        let registry = InstrumentRegistry::builtin();
        let gold = registry.get("XAUUSD").unwrap();
        let mut req = request(gold);
        req.risk_percentage = dec!(100);
        assert!(validate(&req).is_empty());

        req.risk_percentage = dec!(100.01);
        assert_eq!(
            validate(&req),
            vec![RuleViolation::RiskPercentageOutOfRange]
        );
    }

    #[test]
    fn each_rule_reports_its_own_violation() {
        let registry = InstrumentRegistry::builtin();
        let gold = registry.get("XAUUSD").unwrap();

        let mut req = request(gold);
        req.account_balance = Decimal::ZERO;
        assert_eq!(validate(&req), vec![RuleViolation::NonPositiveBalance]);

        let mut req = request(gold);
        req.entry_price = dec!(-1);
        assert_eq!(validate(&req), vec![RuleViolation::NonPositiveEntryPrice]);

        let mut req = request(gold);
        req.stop_loss = Decimal::ZERO;
        assert_eq!(validate(&req), vec![RuleViolation::NonPositiveStopLoss]);

        let mut req = request(gold);
        req.stop_loss = req.entry_price;
        assert_eq!(validate(&req), vec![RuleViolation::EqualEntryAndStop]);
    }

    #[test]
    fn violations_accumulate_without_short_circuit() {
        let registry = InstrumentRegistry::builtin();
        let gold = registry.get("XAUUSD").unwrap();
        let mut req = request(gold);
        req.account_balance = dec!(-5);
        req.stop_loss = req.entry_price;

        let violations = validate(&req);
        assert_eq!(
            violations,
            vec![
                RuleViolation::NonPositiveBalance,
                RuleViolation::EqualEntryAndStop,
            ]
        );
    }

    #[test]
    fn messages_match_user_facing_wording() {
        assert_eq!(
            RuleViolation::EqualEntryAndStop.to_string(),
            "Entry price and stop loss cannot be the same"
        );
        assert_eq!(
            RuleViolation::NonPositiveBalance.to_string(),
            "Account balance must be greater than 0"
        );
    }
}
