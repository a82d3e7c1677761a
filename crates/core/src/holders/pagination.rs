//! Page requests and cache keys for paged chain API lists.

use explorer_stacks_api::{FungibleTokenHolderList, NonFungibleTokenHoldingsList};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HOLDER_LIMIT, MAX_NFT_HOLDINGS_LIMIT};

/// `limit`/`offset` window into a paged list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

impl PageRequest {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// Window for a zero-based table page.
    pub fn from_page(page_index: u32, page_size: u32) -> Self {
        Self {
            limit: page_size,
            offset: page_index.saturating_mul(page_size),
        }
    }

    /// Zero-based page this window starts on. Offsets that are not a multiple
    /// of the limit round down.
    pub fn page_index(&self) -> u32 {
        if self.limit == 0 {
            0
        } else {
            self.offset / self.limit
        }
    }

    pub fn holders_default() -> Self {
        Self::new(DEFAULT_HOLDER_LIMIT, 0)
    }

    pub fn nft_holdings_default() -> Self {
        Self::new(MAX_NFT_HOLDINGS_LIMIT, 0)
    }

    /// Caps the limit at `max`.
    pub fn clamp_limit(self, max: u32) -> Self {
        Self {
            limit: self.limit.min(max),
            ..self
        }
    }
}

/// A page of a list whose total length is known.
pub trait Paged {
    fn limit(&self) -> u32;
    fn offset(&self) -> u32;
    fn total(&self) -> u64;
}

impl Paged for FungibleTokenHolderList {
    fn limit(&self) -> u32 {
        self.limit
    }
    fn offset(&self) -> u32 {
        self.offset
    }
    fn total(&self) -> u64 {
        self.total
    }
}

impl Paged for NonFungibleTokenHoldingsList {
    fn limit(&self) -> u32 {
        self.limit
    }
    fn offset(&self) -> u32 {
        self.offset
    }
    fn total(&self) -> u64 {
        self.total
    }
}

/// Offset of the page after `page`, or `None` on the last page.
pub fn next_page_offset<P: Paged>(page: &P) -> Option<u32> {
    let next = page.offset() as u64 + page.limit() as u64;
    if page.limit() > 0 && next < page.total() {
        u32::try_from(next).ok()
    } else {
        None
    }
}

/// Cache key of one page of a token's holders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HoldersQueryKey {
    pub asset_id: String,
    pub limit: u32,
    pub offset: u32,
}

impl HoldersQueryKey {
    pub fn new(asset_id: &str, page: PageRequest) -> Self {
        Self {
            asset_id: asset_id.to_string(),
            limit: page.limit,
            offset: page.offset,
        }
    }
}

/// Cache key of one page of a principal's NFTs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NftHoldingsQueryKey {
    pub principal: String,
    pub limit: u32,
    pub offset: u32,
    pub tx_metadata: bool,
}

impl NftHoldingsQueryKey {
    pub fn new(principal: &str, page: PageRequest, tx_metadata: bool) -> Self {
        Self {
            principal: principal.to_string(),
            limit: page.limit,
            offset: page.offset,
            tx_metadata,
        }
    }
}
