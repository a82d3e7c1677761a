//! Share of total supply held by one balance.

use num_traits::{Signed, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use super::pow::pow10;
use super::RawAmount;
use crate::constants::MAX_HOLDING_PRECISION;

/// Percentages below this are shown as `"<0.0001%"`.
const SMALLEST_DISPLAYED_PERCENTAGE: f64 = 0.0001;

/// `balance / total_supply * 100`, rounded to `precision` fractional digits.
///
/// Integer-like inputs are divided exactly: the balance is scaled by
/// `10^(precision + 2)` before the integer division, so very large supplies
/// lose nothing before the final conversion to `f64`. The result keeps all
/// `precision` fractional digits of the percentage, not only two. Inputs that
/// are not integer-like (fractions, exponents) fall back to floating point.
/// `precision` is capped at [`MAX_HOLDING_PRECISION`].
///
/// Returns `None` when the percentage is undefined: total supply not
/// positive, negative balance, or inputs that are not numbers. An empty
/// balance string counts as zero.
///
/// ```
/// use explorer_core::amounts::calculate_holding_percentage;
///
/// assert_eq!(calculate_holding_percentage("1000", "10000", 4), Some(10.0));
/// assert_eq!(calculate_holding_percentage("100", "0", 4), None);
/// ```
pub fn calculate_holding_percentage(
    balance: impl Into<RawAmount>,
    total_supply: impl Into<RawAmount>,
    precision: u32,
) -> Option<f64> {
    let balance = balance.into();
    let total_supply = total_supply.into();
    let precision = precision.min(MAX_HOLDING_PRECISION);

    match (balance.to_bigint(), total_supply.to_bigint()) {
        (Some(balance), Some(total_supply)) => {
            if !total_supply.is_positive() || balance.is_negative() {
                return None;
            }
            let quotient = (balance * pow10(precision + 2)) / total_supply;
            let percentage = quotient.to_f64()? / 10f64.powi(precision as i32);
            Some(round_to_precision(percentage, precision))
        }
        _ => {
            let balance = balance.to_f64();
            let total_supply = total_supply.to_f64();
            if !balance.is_finite()
                || !total_supply.is_finite()
                || total_supply <= 0.0
                || balance < 0.0
            {
                return None;
            }
            Some(round_to_precision(balance / total_supply * 100.0, precision))
        }
    }
}

/// Display string for a holding percentage.
///
/// `None`, NaN and negative values are `"-"`; values at or above 100 are
/// capped to `"100%"`; tiny positive values are `"<0.0001%"`.
///
/// ```
/// use explorer_core::amounts::format_holding_percentage;
///
/// assert_eq!(format_holding_percentage(Some(12.3456789)), "12.3457%");
/// assert_eq!(format_holding_percentage(None), "-");
/// ```
pub fn format_holding_percentage(percentage: Option<f64>) -> String {
    match percentage {
        None => "-".to_string(),
        Some(p) if p.is_nan() || p < 0.0 => "-".to_string(),
        Some(p) if p == 0.0 => "0%".to_string(),
        Some(p) if p >= 100.0 => "100%".to_string(),
        Some(p) if p < SMALLEST_DISPLAYED_PERCENTAGE => "<0.0001%".to_string(),
        Some(p) => format!("{}%", to_fixed(p, 4)),
    }
}

/// Rounds half away from zero on the exact binary value, the way a
/// fixed-point display would.
pub(crate) fn round_to_precision(value: f64, precision: u32) -> f64 {
    match Decimal::from_f64_retain(value) {
        Some(exact) => exact
            .round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
            .to_string()
            .parse::<f64>()
            .unwrap_or(value),
        None => value,
    }
}

/// Fixed-point text with exactly `digits` fractional digits.
pub(crate) fn to_fixed(value: f64, digits: u32) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", digits as usize, rounded)
        }
        None => format!("{:.*}", digits as usize, value),
    }
}
