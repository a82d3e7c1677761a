use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Exponent must be non-negative, got {0}")]
    NegativeExponent(i64),

    #[error("Exponent {0} is too large")]
    ExponentTooLarge(i64),
}
