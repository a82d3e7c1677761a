//! Error types and retry classification for the Stacks API crate.
//!
//! This module provides:
//! - [`StacksApiError`]: The main error enum for all API operations
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while talking to the chain API.
#[derive(Error, Debug)]
pub enum StacksApiError {
    /// The requested resource (token, contract, principal) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The API rate limited the request (HTTP 429).
    #[error("Rate limited by {endpoint}")]
    RateLimited { endpoint: String },

    /// The request timed out.
    #[error("Timeout calling {endpoint}")]
    Timeout { endpoint: String },

    /// The API answered with a non-success status.
    #[error("HTTP {status} from {endpoint}: {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to parse response from {endpoint}: {message}")]
    Parse { endpoint: String, message: String },

    /// A network error occurred while communicating with the API.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl StacksApiError {
    /// Returns the retry classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use explorer_stacks_api::errors::{RetryClass, StacksApiError};
    ///
    /// let error = StacksApiError::RateLimited { endpoint: "/holders".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = StacksApiError::NotFound("SP000.unknown".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::RateLimited { .. } | Self::Timeout { .. } => RetryClass::WithBackoff,
            Self::Http { status, .. } if *status >= 500 => RetryClass::WithBackoff,
            Self::NotFound(_) | Self::Http { .. } | Self::Parse { .. } | Self::Network(_) => {
                RetryClass::Never
            }
        }
    }

    /// HTTP status the upstream answered with, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(404),
            Self::RateLimited { .. } => Some(429),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
