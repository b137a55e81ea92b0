//! End-to-end tests for the sizing pipeline through the public API.

use lot_engine::{
    InstrumentRegistry, LotSizer, SizingRequest, TradeSide, pip_distance, price_from_pips,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn two_percent_risk_over_twenty_pips_sizes_one_lot() {
    let registry = InstrumentRegistry::builtin();
    let gold = registry.get("XAUUSD").expect("builtin gold");
    let request = SizingRequest::from_prices(dec!(10000), dec!(2), dec!(2650), dec!(2630), gold);

    let result = LotSizer::new().calculate(&request);

    assert!(result.is_valid);
    assert_eq!(result.risk_amount, dec!(200.00));
    assert_eq!(result.pip_distance, dec!(20.00));
    assert_eq!(result.lot_size, dec!(1.00));
    assert_eq!(result.pip_value, dec!(10.00));
    assert_eq!(result.position_notional, dec!(265000.00));
}

#[test]
fn equal_prices_yield_single_error_and_zero_lot() {
    let registry = InstrumentRegistry::builtin();
    let gold = registry.get("XAUUSD").expect("builtin gold");
    let request = SizingRequest::from_prices(dec!(10000), dec!(2), dec!(2650), dec!(2650), gold);

    let result = LotSizer::new().calculate(&request);

    assert!(!result.is_valid);
    assert_eq!(
        result.messages(),
        vec!["Entry price and stop loss cannot be the same"]
    );
    assert_eq!(result.lot_size, Decimal::ZERO);
}

#[test]
fn multiple_violations_are_all_reported() {
    let registry = InstrumentRegistry::builtin();
    let gold = registry.get("XAUUSD").expect("builtin gold");
    // Negative balance and an equal entry/stop pair at once.
    let request = SizingRequest::from_prices(dec!(-5), dec!(2), dec!(2650), dec!(2650), gold);

    let result = LotSizer::new().calculate(&request);

    assert!(!result.is_valid);
    assert_eq!(
        result.messages(),
        vec![
            "Account balance must be greater than 0",
            "Entry price and stop loss cannot be the same",
        ]
    );
    assert_eq!(result.lot_size, Decimal::ZERO);
    assert_eq!(result.risk_amount, Decimal::ZERO);
}

#[test]
fn huge_account_is_capped_at_max_lot_size() {
    let registry = InstrumentRegistry::builtin();
    let gold = registry.get("XAUUSD").expect("builtin gold");
    // raw lot size 1,000,000 / (10 * 50) = 2000, capped at 100.
    let request =
        SizingRequest::from_prices(dec!(10000000), dec!(10), dec!(2650), dec!(2600), gold);

    let result = LotSizer::new().calculate(&request);

    assert!(result.is_valid);
    assert_eq!(result.lot_size, dec!(100.00));
}

#[test]
fn tiny_account_is_raised_to_min_lot_size() {
    let registry = InstrumentRegistry::builtin();
    let gold = registry.get("XAUUSD").expect("builtin gold");
    let request = SizingRequest::from_prices(dec!(100), dec!(1), dec!(2650), dec!(2600), gold);

    let result = LotSizer::new().calculate(&request);

    assert!(result.is_valid);
    assert_eq!(result.lot_size, dec!(0.01));
}

#[test]
fn valid_results_stay_within_lot_bounds_and_on_step() {
    let registry = InstrumentRegistry::builtin();
    let sizer = LotSizer::new();

    let balances = [dec!(50), dec!(1000), dec!(10000), dec!(5000000)];
    let risks = [dec!(0.5), dec!(2), dec!(25), dec!(100)];
    let stops = [dec!(2649), dec!(2630), dec!(2500)];

    let gold = registry.get("XAUUSD").expect("builtin gold");
    for balance in balances {
        for risk in risks {
            for stop in stops {
                let request = SizingRequest::from_prices(balance, risk, dec!(2650), stop, gold);
                let result = sizer.calculate(&request);

                assert!(result.is_valid);
                assert!(result.lot_size >= gold.min_lot_size);
                assert!(result.lot_size <= gold.max_lot_size);
                assert_eq!(
                    result.lot_size % gold.lot_step,
                    Decimal::ZERO,
                    "lot size {} off step for balance {balance}, risk {risk}, stop {stop}",
                    result.lot_size
                );
            }
        }
    }
}

#[test]
fn pip_distance_round_trips_through_price_from_pips() {
    let registry = InstrumentRegistry::builtin();
    for instrument in registry.all() {
        let entry = instrument.reference_price;
        let distances = [dec!(1), dec!(20), dec!(125.5)];
        for pips in distances {
            let stop = price_from_pips(entry, pips, instrument, TradeSide::Buy);
            assert_eq!(
                pip_distance(entry, stop, instrument),
                pips,
                "round trip failed for {} at {pips} pips",
                instrument.id
            );
        }
    }
}

#[test]
fn repeated_calls_with_identical_input_agree() {
    let registry = InstrumentRegistry::builtin();
    let euro = registry.get("EURUSD").expect("builtin euro");
    let request =
        SizingRequest::from_pip_distance(dec!(25000), dec!(1.5), dec!(35), TradeSide::Sell, euro);
    let sizer = LotSizer::new();

    let first = sizer.calculate(&request);
    for _ in 0..10 {
        assert_eq!(sizer.calculate(&request), first);
    }
}
