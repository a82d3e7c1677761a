//! Property-based integration tests for token amount math.
//!
//! These tests check invariants of powers, decimal adjustment and holding
//! percentages over random inputs, using `proptest`.

use explorer_core::amounts::{
    bigint_pow, calculate_holding_percentage, format_holding_percentage,
    ft_decimal_adjusted_balance,
};
use explorer_core::tokens::derive_token_ticker_from_asset_id;
use num_bigint::BigInt;
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

/// Digit strings long enough to overflow every primitive integer.
fn arb_big_digits() -> impl Strategy<Value = String> {
    "[1-9][0-9]{0,40}"
}

fn arb_precision() -> impl Strategy<Value = u32> {
    0u32..=8
}

// =============================================================================
// bigint_pow
// =============================================================================

proptest! {
    #[test]
    fn prop_pow_zero_is_one(base in any::<i64>()) {
        prop_assert_eq!(bigint_pow(&BigInt::from(base), 0).unwrap(), BigInt::from(1));
    }

    #[test]
    fn prop_pow_one_is_identity(base in any::<i64>()) {
        prop_assert_eq!(bigint_pow(&BigInt::from(base), 1).unwrap(), BigInt::from(base));
    }

    #[test]
    fn prop_pow_adds_exponents(base in -50i64..50, a in 0i64..20, b in 0i64..20) {
        let base = BigInt::from(base);
        let lhs = bigint_pow(&base, a + b).unwrap();
        let rhs = bigint_pow(&base, a).unwrap() * bigint_pow(&base, b).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn prop_negative_exponent_rejected(base in any::<i64>(), exponent in i64::MIN..0) {
        prop_assert!(bigint_pow(&BigInt::from(base), exponent).is_err());
    }
}

// =============================================================================
// Holding percentage
// =============================================================================

proptest! {
    #[test]
    fn prop_whole_supply_is_hundred(total in arb_big_digits(), precision in arb_precision()) {
        prop_assert_eq!(
            calculate_holding_percentage(total.as_str(), total.as_str(), precision),
            Some(100.0)
        );
    }

    #[test]
    fn prop_non_positive_total_is_none(balance in 0u64.., total in i64::MIN..=0) {
        prop_assert_eq!(calculate_holding_percentage(balance, total, 4), None);
    }

    #[test]
    fn prop_negative_balance_is_none(balance in i64::MIN..0, total in 1u64..) {
        prop_assert_eq!(calculate_holding_percentage(balance, total, 4), None);
    }

    #[test]
    fn prop_percentage_within_bounds(total in 1u64.., share in 0.0f64..=1.0) {
        let balance = ((total as f64) * share) as u64;
        let balance = balance.min(total);
        let pct = calculate_holding_percentage(balance, total, 4).unwrap();
        prop_assert!((0.0..=100.0).contains(&pct));
    }

    #[test]
    fn prop_format_never_panics(pct in proptest::option::of(any::<f64>())) {
        let formatted = format_holding_percentage(pct);
        prop_assert!(formatted == "-" || formatted.ends_with('%'));
    }
}

// =============================================================================
// Decimal adjustment and tickers
// =============================================================================

proptest! {
    #[test]
    fn prop_adjustment_preserves_digits(raw in arb_big_digits(), decimals in 0u32..30) {
        let adjusted = ft_decimal_adjusted_balance(raw.as_str(), decimals).unwrap();
        let text = adjusted.to_string();
        let expected_integer = adjusted.integer_part().to_string();
        prop_assert!(text.starts_with(&expected_integer));
        prop_assert_eq!(adjusted.raw().to_string(), raw);
    }

    #[test]
    fn prop_ticker_is_short_and_upper(asset in "[a-z]{0,10}(-[a-z]{1,6}){0,4}") {
        let ticker = derive_token_ticker_from_asset_id(&asset);
        prop_assert!(ticker.chars().count() <= 3);
        prop_assert_eq!(ticker.to_uppercase(), ticker.clone());
    }
}
