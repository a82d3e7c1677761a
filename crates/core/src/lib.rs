//! Explorer Core - token math, token helpers and holder table services.
//!
//! The numeric heart of the crate is [`amounts`]: decimal adjustment of raw
//! token balances and holding percentages computed with big-integer
//! arithmetic. [`holders`] pages and caches holder tables on top of the chain
//! API, and [`tokens`] derives display data (tickers, images, alerts, supply
//! figures) from token metadata.

pub mod amounts;
pub mod constants;
pub mod errors;
pub mod holders;
pub mod tokens;

pub use amounts::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
