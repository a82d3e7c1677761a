//! Explorer Stacks API Crate
//!
//! Typed access to the chain's HTTP API for the explorer.
//!
//! # Overview
//!
//! The crate supports:
//! - Fungible token holder lists (`/extended/v1/tokens/ft/{token}/holders`)
//! - Non-fungible token holdings (`/extended/v1/tokens/nft/holdings`)
//! - Fungible token metadata (`/metadata/v1/ft/{token}`)
//! - Contract info including the contract ABI (`/extended/v1/contract/{id}`)
//! - Rate limiting and retry with backoff for transient failures
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Domain Layer   | --> |    StacksApi     |  (trait, mockable)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | StacksApiClient  |  (reqwest + rate limiter)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  Response Models |  (serde)
//!                          +------------------+
//! ```

pub mod client;
pub mod errors;
pub mod models;
pub mod rate_limiter;

pub use client::{Network, StacksApi, StacksApiClient, StacksApiClientConfig};
pub use errors::{RetryClass, StacksApiError};
pub use models::{
    ContractInfo, FtMetadataResponse, FungibleTokenHolder, FungibleTokenHolderList,
    NftHoldingValue, NonFungibleTokenHolding, NonFungibleTokenHoldingsList, TokenMetadata,
};
pub use rate_limiter::{RateLimitConfig, RateLimiter};
