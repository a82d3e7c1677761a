use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use explorer_stacks_api::{FungibleTokenHolderList, NonFungibleTokenHoldingsList, StacksApi};

use super::holders_model::{HolderRow, HoldersTablePage};
use super::holders_traits::HoldersServiceTrait;
use super::page_cache::PageCache;
use super::pagination::{HoldersQueryKey, NftHoldingsQueryKey, PageRequest};
use crate::amounts::{
    calculate_holding_percentage, format_holding_percentage, ft_decimal_adjusted_balance,
    RawAmount,
};
use crate::constants::{
    DEFAULT_HOLDER_LIMIT, HOLDERS_STALE_TIME, HOLDERS_TABLE_HOLDING_PRECISION,
    HOLDERS_TABLE_STALE_TIME, HOLDING_NOT_AVAILABLE, MAX_NFT_HOLDINGS_LIMIT,
    NFT_HOLDINGS_STALE_TIME,
};
use crate::errors::{Error, Result};
use crate::tokens::validate_contract_id;

/// Stale times of the service's page caches.
#[derive(Debug, Clone, Copy)]
pub struct HoldersCacheConfig {
    pub table_stale_time: Duration,
    pub infinite_stale_time: Duration,
    pub nft_stale_time: Duration,
}

impl Default for HoldersCacheConfig {
    fn default() -> Self {
        Self {
            table_stale_time: HOLDERS_TABLE_STALE_TIME,
            infinite_stale_time: HOLDERS_STALE_TIME,
            nft_stale_time: NFT_HOLDINGS_STALE_TIME,
        }
    }
}

/// Pages token holders and NFT holdings through per-query caches.
pub struct HoldersService {
    api: Arc<dyn StacksApi>,
    table_cache: PageCache<HoldersQueryKey, FungibleTokenHolderList>,
    infinite_cache: PageCache<HoldersQueryKey, FungibleTokenHolderList>,
    nft_cache: PageCache<NftHoldingsQueryKey, NonFungibleTokenHoldingsList>,
}

impl HoldersService {
    pub fn new(api: Arc<dyn StacksApi>) -> Self {
        Self::with_cache_config(api, HoldersCacheConfig::default())
    }

    pub fn with_cache_config(api: Arc<dyn StacksApi>, config: HoldersCacheConfig) -> Self {
        Self {
            api,
            table_cache: PageCache::new(config.table_stale_time),
            infinite_cache: PageCache::new(config.infinite_stale_time),
            nft_cache: PageCache::new(config.nft_stale_time),
        }
    }

    /// Drops stale pages from every cache.
    pub fn purge_stale(&self) -> usize {
        self.table_cache.purge_stale()
            + self.infinite_cache.purge_stale()
            + self.nft_cache.purge_stale()
    }

    async fn fetch_holders_cached(
        &self,
        cache: &PageCache<HoldersQueryKey, FungibleTokenHolderList>,
        asset_id: &str,
        page: PageRequest,
    ) -> Result<Option<FungibleTokenHolderList>> {
        if asset_id.is_empty() {
            return Ok(None);
        }
        let key = HoldersQueryKey::new(asset_id, page);
        if let Some(list) = cache.get(&key) {
            debug!(
                "Holders cache hit for {} (limit {}, offset {})",
                asset_id, page.limit, page.offset
            );
            return Ok(Some(list));
        }

        debug!(
            "Fetching holders for {} (limit {}, offset {})",
            asset_id, page.limit, page.offset
        );
        let list = self
            .api
            .get_ft_holders(asset_id, page.limit, page.offset)
            .await?;
        cache.insert(key, list.clone());
        Ok(Some(list))
    }
}

/// Builds table rows for one page of holders.
///
/// Balances are scaled by `decimals` and shown with up to `decimals`
/// fraction digits. Holdings use six digits of precision; a zero or
/// undefined share is shown as `"N/A"`.
pub fn build_holder_rows(
    holders: &FungibleTokenHolderList,
    page_index: u32,
    page_size: u32,
    total_supply: &RawAmount,
    decimals: u32,
) -> Vec<HolderRow> {
    let first_index = page_index as u64 * page_size as u64 + 1;
    holders
        .results
        .iter()
        .enumerate()
        .map(|(i, holder)| {
            let balance = ft_decimal_adjusted_balance(holder.balance.as_str(), decimals)
                .map(|amount| amount.format_grouped(0, decimals))
                .unwrap_or_else(|| holder.balance.clone());
            let holding = calculate_holding_percentage(
                holder.balance.as_str(),
                total_supply.clone(),
                HOLDERS_TABLE_HOLDING_PRECISION,
            )
            .filter(|p| *p > 0.0)
            .map(|p| format_holding_percentage(Some(p)))
            .unwrap_or_else(|| HOLDING_NOT_AVAILABLE.to_string());

            HolderRow {
                index: first_index + i as u64,
                address: holder.address.clone(),
                is_contract: validate_contract_id(&holder.address),
                balance,
                holding,
            }
        })
        .collect()
}

#[async_trait]
impl HoldersServiceTrait for HoldersService {
    async fn get_holders(
        &self,
        asset_id: &str,
        page: PageRequest,
    ) -> Result<Option<FungibleTokenHolderList>> {
        self.fetch_holders_cached(&self.table_cache, asset_id, page)
            .await
    }

    async fn get_holders_from_offset(
        &self,
        asset_id: &str,
        offset: u32,
    ) -> Result<Option<FungibleTokenHolderList>> {
        let page = PageRequest::new(DEFAULT_HOLDER_LIMIT, offset);
        self.fetch_holders_cached(&self.infinite_cache, asset_id, page)
            .await
    }

    fn seed_holders_page(&self, asset_id: &str, page: PageRequest, list: FungibleTokenHolderList) {
        if asset_id.is_empty() {
            return;
        }
        self.table_cache
            .seed(HoldersQueryKey::new(asset_id, page), list);
    }

    async fn get_holder_rows(
        &self,
        asset_id: &str,
        page_index: u32,
        page_size: u32,
        total_supply: RawAmount,
        decimals: u32,
    ) -> Result<HoldersTablePage> {
        if page_size == 0 {
            return Err(Error::Validation(
                "Page size must be greater than zero".to_string(),
            ));
        }
        let page = PageRequest::from_page(page_index, page_size);
        let Some(list) = self.get_holders(asset_id, page).await? else {
            return Err(Error::Validation("Asset identifier is required".to_string()));
        };

        Ok(HoldersTablePage {
            rows: build_holder_rows(&list, page_index, page_size, &total_supply, decimals),
            total: list.total,
            page_index,
            page_size,
        })
    }

    async fn get_nft_holdings(
        &self,
        principal: &str,
        page: PageRequest,
        tx_metadata: bool,
    ) -> Result<NonFungibleTokenHoldingsList> {
        if principal.is_empty() {
            return Err(Error::Validation("Address is required".to_string()));
        }
        let page = page.clamp_limit(MAX_NFT_HOLDINGS_LIMIT);
        let key = NftHoldingsQueryKey::new(principal, page, tx_metadata);
        if let Some(list) = self.nft_cache.get(&key) {
            debug!("NFT holdings cache hit for {}", principal);
            return Ok(list);
        }

        debug!(
            "Fetching NFT holdings for {} (limit {}, offset {}, tx_metadata {})",
            principal, page.limit, page.offset, tx_metadata
        );
        let list = self
            .api
            .get_nft_holdings(principal, page.limit, page.offset, tx_metadata)
            .await?;
        self.nft_cache.insert(key, list.clone());
        Ok(list)
    }
}
