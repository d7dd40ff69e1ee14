//! Property-based tests for payoff analysis invariants.
//!
//! These hold for every valid portfolio:
//! - The default curve is 101 points at 50, 51, ..., 150
//! - Max profit / max loss bound the curve and are attained on it
//! - Break-even prices are sampled prices where the sign crosses or touches zero
//! - Validation accepts exactly the four literal spellings

use payoff_core::analysis::{break_even_prices, max_loss, max_profit, payoff_curve};
use payoff_core::prelude::*;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn option_kind() -> impl Strategy<Value = OptionKind> {
    prop_oneof![Just(OptionKind::Call), Just(OptionKind::Put)]
}

fn position_side() -> impl Strategy<Value = PositionSide> {
    prop_oneof![Just(PositionSide::Long), Just(PositionSide::Short)]
}

fn contract() -> impl Strategy<Value = Contract> {
    (
        option_kind(),
        position_side(),
        1.0f64..250.0,
        0.0f64..40.0,
        0.0f64..5.0,
    )
        .prop_map(|(kind, position, strike, bid, spread)| {
            Contract::new(kind, position, strike, bid, bid + spread)
        })
}

fn portfolio() -> impl Strategy<Value = Vec<Contract>> {
    prop::collection::vec(contract(), 0..8)
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn curve_covers_default_grid(contracts in portfolio()) {
        let result = analyze(&contracts);

        prop_assert_eq!(result.curve.len(), 101);
        for (i, point) in result.curve.iter().enumerate() {
            prop_assert_eq!(point.price, 50.0 + i as f64);
        }
    }

    #[test]
    fn extremes_bound_and_lie_on_curve(contracts in portfolio()) {
        let result = analyze(&contracts);

        prop_assert!(result.curve.iter().all(|p| p.profit_loss <= result.max_profit));
        prop_assert!(result.curve.iter().all(|p| p.profit_loss >= result.max_loss));
        prop_assert!(result.curve.iter().any(|p| p.profit_loss == result.max_profit));
        prop_assert!(result.curve.iter().any(|p| p.profit_loss == result.max_loss));
    }

    #[test]
    fn break_evens_match_sign_rule(contracts in portfolio()) {
        let result = analyze(&contracts);

        let expected: Vec<f64> = result
            .curve
            .windows(2)
            .filter(|w| {
                let (a, b) = (w[0].profit_loss, w[1].profit_loss);
                (a <= 0.0 && b >= 0.0) || (a >= 0.0 && b <= 0.0)
            })
            .map(|w| w[1].price)
            .collect();
        prop_assert_eq!(&result.break_even_prices, &expected);

        // Subset of sampled prices, in scan order, never the first price.
        prop_assert!(result.break_even_prices.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(result.break_even_prices.iter().all(|&x| (51.0..=150.0).contains(&x)));
    }

    #[test]
    fn one_signed_curve_has_no_break_even(contracts in portfolio()) {
        let result = analyze(&contracts);

        if result.curve.iter().all(|p| p.profit_loss > 0.0)
            || result.curve.iter().all(|p| p.profit_loss < 0.0)
        {
            prop_assert!(result.break_even_prices.is_empty());
        }
    }

    #[test]
    fn order_of_contracts_does_not_move_extremes(contracts in portfolio()) {
        let forward = analyze(&contracts);
        let mut reversed_contracts = contracts.clone();
        reversed_contracts.reverse();
        let reversed = analyze(&reversed_contracts);

        prop_assert!((forward.max_profit - reversed.max_profit).abs() < 1e-9);
        prop_assert!((forward.max_loss - reversed.max_loss).abs() < 1e-9);
    }

    #[test]
    fn result_matches_building_blocks(
        contracts in portfolio(),
        start in 0.0f64..100.0,
        width in 0.0f64..100.0,
        step in 0.25f64..10.0,
    ) {
        let scan = PriceScan::new(start, start + width, step).unwrap();
        let result = PayoffAnalyzer::new(scan).unwrap().analyze(&contracts);
        let curve = payoff_curve(&contracts, &scan);

        prop_assert_eq!(result.curve.len(), scan.len());
        prop_assert_eq!(result.max_profit, max_profit(&curve));
        prop_assert_eq!(result.max_loss, max_loss(&curve));
        prop_assert_eq!(result.break_even_prices, break_even_prices(&curve));
    }

    #[test]
    fn validation_accepts_only_exact_literals(
        option_type in "[A-Za-z]{0,6}",
        long_short in "[A-Za-z]{0,6}",
    ) {
        let input = ContractInput {
            option_type: option_type.clone(),
            strike_price: 100.0,
            bid: 1.0,
            ask: 2.0,
            expiration_date: None,
            long_short: long_short.clone(),
        };

        let type_ok = option_type == "Call" || option_type == "Put";
        let side_ok = long_short == "long" || long_short == "short";

        match input.validate() {
            Ok(contract) => {
                prop_assert!(type_ok && side_ok);
                prop_assert_eq!(contract.kind.to_string(), option_type);
                prop_assert_eq!(contract.position.to_string(), long_short);
            }
            Err(PayoffError::InvalidOptionType { .. }) => prop_assert!(!type_ok),
            Err(PayoffError::InvalidPositionType { .. }) => prop_assert!(type_ok && !side_ok),
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
