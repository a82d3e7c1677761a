//! Core error types for the explorer.
//!
//! Amount math itself reports "not computable" as `None`; these errors cover
//! invalid requests and failures of the upstream chain API.

use explorer_stacks_api::StacksApiError;
use thiserror::Error;

use crate::amounts::AmountError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Amount calculation failed: {0}")]
    Amount(#[from] AmountError),

    #[error("Chain API request failed: {0}")]
    Api(#[from] StacksApiError),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True when the error comes from the upstream API rather than the request.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Error::Api(_))
    }
}
