//! Scaling raw token amounts down to display units.

use super::{AdjustedAmount, RawAmount};
use crate::constants::MICROSTACKS_DECIMALS;

/// Divides a raw integer amount by `10^decimals`.
///
/// Returns `None` when the amount is not an integer (see
/// [`RawAmount::to_bigint`]).
///
/// ```
/// use explorer_core::amounts::ft_decimal_adjusted_balance;
///
/// let adjusted = ft_decimal_adjusted_balance("123456789", 6).unwrap();
/// assert_eq!(adjusted.to_string(), "123.456789");
/// ```
pub fn ft_decimal_adjusted_balance(
    amount: impl Into<RawAmount>,
    decimals: u32,
) -> Option<AdjustedAmount> {
    let raw = amount.into().to_bigint()?;
    Some(AdjustedAmount::new(raw, decimals))
}

/// Micro-STX to STX.
pub fn micro_to_stacks(amount: impl Into<RawAmount>) -> Option<AdjustedAmount> {
    ft_decimal_adjusted_balance(amount, MICROSTACKS_DECIMALS)
}

/// Micro-STX as a grouped STX string, e.g. `"1,234.5"`.
pub fn micro_to_stacks_formatted(amount: impl Into<RawAmount>) -> Option<String> {
    micro_to_stacks(amount).map(|stx| stx.format_grouped(0, MICROSTACKS_DECIMALS))
}
