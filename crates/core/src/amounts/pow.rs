//! Integer powers over arbitrary-precision integers.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::AmountError;

/// Computes `base^exponent` exactly.
///
/// `exponent` 0 yields 1 for every base, including `0^0`. Negative exponents
/// have no integer result and are rejected.
///
/// # Examples
///
/// ```
/// use explorer_core::amounts::bigint_pow;
/// use num_bigint::BigInt;
///
/// assert_eq!(bigint_pow(&BigInt::from(2), 10).unwrap(), BigInt::from(1024));
/// assert_eq!(bigint_pow(&BigInt::from(0), 0).unwrap(), BigInt::from(1));
/// assert!(bigint_pow(&BigInt::from(10), -1).is_err());
/// ```
pub fn bigint_pow(base: &BigInt, exponent: i64) -> Result<BigInt, AmountError> {
    if exponent < 0 {
        return Err(AmountError::NegativeExponent(exponent));
    }
    let exponent = usize::try_from(exponent).map_err(|_| AmountError::ExponentTooLarge(exponent))?;
    Ok(pow_unsigned(base, exponent))
}

/// `10^exponent`, the divisor for a token with `exponent` decimals.
pub fn pow10(exponent: u32) -> BigInt {
    pow_unsigned(&BigInt::from(10u8), exponent as usize)
}

// Square-and-multiply; zero exponent short-circuits before the base is read.
fn pow_unsigned(base: &BigInt, exponent: usize) -> BigInt {
    if exponent == 0 {
        return BigInt::one();
    }
    if base.is_zero() {
        return BigInt::zero();
    }
    num_traits::pow(base.clone(), exponent)
}
