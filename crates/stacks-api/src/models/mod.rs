//! Response models for the chain API endpoints the explorer consumes.

mod contract;
mod holders;
mod metadata;

pub use contract::ContractInfo;
pub use holders::{
    FungibleTokenHolder, FungibleTokenHolderList, NftHoldingValue, NonFungibleTokenHolding,
    NonFungibleTokenHoldingsList,
};
pub use metadata::{FtMetadataResponse, TokenMetadata};
