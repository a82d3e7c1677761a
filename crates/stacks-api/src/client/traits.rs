//! The `StacksApi` trait the explorer's services are written against.

use async_trait::async_trait;

use crate::errors::StacksApiError;
use crate::models::{
    ContractInfo, FtMetadataResponse, FungibleTokenHolderList, NonFungibleTokenHoldingsList,
};

/// Read access to the chain API.
///
/// [`StacksApiClient`](super::StacksApiClient) is the HTTP implementation;
/// services take `Arc<dyn StacksApi>` so tests can substitute a mock.
#[async_trait]
pub trait StacksApi: Send + Sync {
    /// Base URL requests are sent to, without a trailing slash.
    fn base_url(&self) -> &str;

    /// One page of holders of the fungible token `token`
    /// (`<principal>.<contract>::<asset>`).
    async fn get_ft_holders(
        &self,
        token: &str,
        limit: u32,
        offset: u32,
    ) -> Result<FungibleTokenHolderList, StacksApiError>;

    /// One page of NFTs owned by `principal`.
    async fn get_nft_holdings(
        &self,
        principal: &str,
        limit: u32,
        offset: u32,
        tx_metadata: bool,
    ) -> Result<NonFungibleTokenHoldingsList, StacksApiError>;

    /// Metadata of the fungible token defined by contract `token`.
    async fn get_ft_metadata(&self, token: &str) -> Result<FtMetadataResponse, StacksApiError>;

    /// Contract record, including its JSON encoded ABI.
    async fn get_contract_info(&self, contract_id: &str) -> Result<ContractInfo, StacksApiError>;
}
