//! Holders service trait.

use async_trait::async_trait;
use explorer_stacks_api::{FungibleTokenHolderList, NonFungibleTokenHoldingsList};

use super::holders_model::HoldersTablePage;
use super::pagination::PageRequest;
use crate::amounts::RawAmount;
use crate::errors::Result;

#[async_trait]
pub trait HoldersServiceTrait: Send + Sync {
    /// One page of holders of `asset_id`.
    ///
    /// An empty `asset_id` disables the query and returns `Ok(None)`.
    async fn get_holders(
        &self,
        asset_id: &str,
        page: PageRequest,
    ) -> Result<Option<FungibleTokenHolderList>>;

    /// Page of an infinite holder list starting at `offset`, with the default
    /// page size and a long stale time.
    async fn get_holders_from_offset(
        &self,
        asset_id: &str,
        offset: u32,
    ) -> Result<Option<FungibleTokenHolderList>>;

    /// Pre-populates the cache with a page fetched elsewhere.
    fn seed_holders_page(&self, asset_id: &str, page: PageRequest, list: FungibleTokenHolderList);

    /// Holders table rows for a zero-based page.
    ///
    /// `total_supply` is the raw supply; `decimals` scales balances for
    /// display.
    async fn get_holder_rows(
        &self,
        asset_id: &str,
        page_index: u32,
        page_size: u32,
        total_supply: RawAmount,
        decimals: u32,
    ) -> Result<HoldersTablePage>;

    /// NFTs owned by `principal`. The page limit is capped at 200.
    async fn get_nft_holdings(
        &self,
        principal: &str,
        page: PageRequest,
        tx_metadata: bool,
    ) -> Result<NonFungibleTokenHoldingsList>;
}
