//! Tests for raw amount normalization and decimal-adjusted amounts.

#[cfg(test)]
mod tests {
    use crate::amounts::{
        ft_decimal_adjusted_balance, micro_to_stacks, micro_to_stacks_formatted, AdjustedAmount,
        RawAmount,
    };
    use num_bigint::BigInt;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    // ==================== RawAmount::to_bigint ====================

    #[test]
    fn test_to_bigint_decimal_text() {
        assert_eq!(RawAmount::from("12345").to_bigint(), Some(BigInt::from(12345)));
        assert_eq!(RawAmount::from("  42 ").to_bigint(), Some(BigInt::from(42)));
        assert_eq!(RawAmount::from("-7").to_bigint(), Some(BigInt::from(-7)));
        assert_eq!(RawAmount::from("+7").to_bigint(), Some(BigInt::from(7)));
    }

    #[test]
    fn test_to_bigint_empty_text_is_zero() {
        assert_eq!(RawAmount::from("").to_bigint(), Some(BigInt::from(0)));
        assert_eq!(RawAmount::from("   ").to_bigint(), Some(BigInt::from(0)));
    }

    #[test]
    fn test_to_bigint_radix_literals() {
        assert_eq!(RawAmount::from("0x1f").to_bigint(), Some(BigInt::from(31)));
        assert_eq!(RawAmount::from("0o17").to_bigint(), Some(BigInt::from(15)));
        assert_eq!(RawAmount::from("0b101").to_bigint(), Some(BigInt::from(5)));
        assert_eq!(RawAmount::from("-0x1f").to_bigint(), None);
        assert_eq!(RawAmount::from("0x").to_bigint(), None);
    }

    #[test]
    fn test_to_bigint_rejects_non_integers() {
        assert_eq!(RawAmount::from("1.5").to_bigint(), None);
        assert_eq!(RawAmount::from("1e3").to_bigint(), None);
        assert_eq!(RawAmount::from("abc").to_bigint(), None);
        assert_eq!(RawAmount::from("-").to_bigint(), None);
        assert_eq!(RawAmount::from(0.5).to_bigint(), None);
        assert_eq!(RawAmount::from(f64::NAN).to_bigint(), None);
    }

    #[test]
    fn test_to_bigint_integral_numbers() {
        assert_eq!(RawAmount::from(1000.0).to_bigint(), Some(BigInt::from(1000)));
        assert_eq!(RawAmount::from(7u64).to_bigint(), Some(BigInt::from(7)));
    }

    // ==================== RawAmount::to_f64 ====================

    #[test]
    fn test_to_f64_lenient_parsing() {
        assert_eq!(RawAmount::from("1e3").to_f64(), 1000.0);
        assert_eq!(RawAmount::from(".5").to_f64(), 0.5);
        assert_eq!(RawAmount::from("").to_f64(), 0.0);
        assert_eq!(RawAmount::from("0x10").to_f64(), 16.0);
        assert_eq!(RawAmount::from("-Infinity").to_f64(), f64::NEG_INFINITY);
        assert!(RawAmount::from("invalid").to_f64().is_nan());
        assert!(RawAmount::from("inf").to_f64().is_nan());
    }

    // ==================== Decimal Adjustment ====================

    #[test]
    fn test_ft_decimal_adjusted_balance() {
        let adjusted = ft_decimal_adjusted_balance("123456789", 6).unwrap();
        assert_eq!(adjusted.to_string(), "123.456789");
        assert_eq!(adjusted.integer_part(), BigInt::from(123));
        assert_eq!(adjusted.to_decimal(), Some(dec!(123.456789)));
    }

    #[test]
    fn test_zero_decimals_is_identity() {
        let adjusted = ft_decimal_adjusted_balance(500u64, 0).unwrap();
        assert_eq!(adjusted.to_string(), "500");
        assert_eq!(adjusted.to_f64(), 500.0);
    }

    #[test]
    fn test_trailing_zeros_are_trimmed() {
        let adjusted = ft_decimal_adjusted_balance("1500000", 6).unwrap();
        assert_eq!(adjusted.to_string(), "1.5");
        let adjusted = ft_decimal_adjusted_balance("5", 8).unwrap();
        assert_eq!(adjusted.to_string(), "0.00000005");
    }

    #[test]
    fn test_non_integer_amount_is_none() {
        assert!(ft_decimal_adjusted_balance("12.5", 6).is_none());
        assert!(ft_decimal_adjusted_balance("not-a-number", 6).is_none());
    }

    #[test]
    fn test_large_amounts_stay_exact() {
        let raw = "123456789012345678901234567890";
        let adjusted = ft_decimal_adjusted_balance(raw, 18).unwrap();
        assert_eq!(adjusted.to_string(), "123456789012.34567890123456789");
        assert_eq!(adjusted.raw(), &BigInt::from_str(raw).unwrap());
    }

    #[test]
    fn test_micro_to_stacks() {
        assert_eq!(micro_to_stacks("1000000").unwrap().to_string(), "1");
        assert_eq!(
            micro_to_stacks_formatted("1234567890123").as_deref(),
            Some("1,234,567.890123")
        );
        assert_eq!(micro_to_stacks_formatted(0u64).as_deref(), Some("0"));
    }

    // ==================== Grouped Formatting ====================

    #[test]
    fn test_format_grouped_rounds_half_up() {
        let amount = AdjustedAmount::new(BigInt::from(1_234_565), 3);
        assert_eq!(amount.format_grouped(0, 2), "1,234.57");
        let amount = AdjustedAmount::new(BigInt::from(1_234_564), 3);
        assert_eq!(amount.format_grouped(0, 2), "1,234.56");
    }

    #[test]
    fn test_format_grouped_pads_to_min_fraction() {
        let amount = AdjustedAmount::new(BigInt::from(15), 1);
        assert_eq!(amount.format_grouped(2, 4), "1.50");
        let amount = AdjustedAmount::new(BigInt::from(1_000_000), 0);
        assert_eq!(amount.format_grouped(0, 0), "1,000,000");
    }

    #[test]
    fn test_format_grouped_negative() {
        let amount = AdjustedAmount::new(BigInt::from(-1_234_500), 2);
        assert_eq!(amount.format_grouped(0, 2), "-12,345");
    }

    #[test]
    fn test_adjusted_amount_serializes_as_string() {
        let amount = AdjustedAmount::new(BigInt::from(2_500_000), 6);
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"2.5\"");
    }
}
