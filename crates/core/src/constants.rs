use std::time::Duration;

/// Fractional digits of a holding percentage unless a caller asks otherwise.
pub const DEFAULT_HOLDING_PRECISION: u32 = 4;

/// Largest precision a holding percentage is computed with; `f64` output
/// carries no meaningful digits beyond it.
pub const MAX_HOLDING_PRECISION: u32 = 20;

/// Fractional digits the holders table computes percentages with.
pub const HOLDERS_TABLE_HOLDING_PRECISION: u32 = 6;

/// Decimals of the chain's native token (1 STX = 1 000 000 micro-STX).
pub const MICROSTACKS_DECIMALS: u32 = 6;

/// Holders per page when the caller does not choose.
pub const DEFAULT_HOLDER_LIMIT: u32 = 20;

/// Largest page the NFT holdings endpoint accepts.
pub const MAX_NFT_HOLDINGS_LIMIT: u32 = 200;

/// Holder table pages go stale quickly while a user paginates.
pub const HOLDERS_TABLE_STALE_TIME: Duration = Duration::from_secs(30);

/// Infinite-scroll holder lists.
pub const HOLDERS_STALE_TIME: Duration = Duration::from_secs(10 * 60);

pub const NFT_HOLDINGS_STALE_TIME: Duration = Duration::from_secs(60);

/// Shown in the holding column when no percentage can be computed.
pub const HOLDING_NOT_AVAILABLE: &str = "N/A";

/// Mainnet sBTC token contract.
pub const SBTC_CONTRACT_ID: &str = "SM3VDXK3WZZSA84XXFKAFAF15NNZX32CTSG82JFQ4.sbtc-token";
