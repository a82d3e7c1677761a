use serde::{Deserialize, Serialize};

/// One holder of a fungible token. `balance` is the raw integer amount in the
/// token's smallest unit, as sent by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FungibleTokenHolder {
    pub address: String,
    pub balance: String,
}

/// Page of holders returned by `/extended/v1/tokens/ft/{token}/holders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FungibleTokenHolderList {
    pub limit: u32,
    pub offset: u32,
    pub total: u64,
    /// Sum of all balances, raw units.
    #[serde(default)]
    pub total_supply: String,
    #[serde(default)]
    pub results: Vec<FungibleTokenHolder>,
}

/// Clarity value of an NFT, both serialized and human readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftHoldingValue {
    pub hex: String,
    pub repr: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonFungibleTokenHolding {
    pub asset_identifier: String,
    pub value: NftHoldingValue,
    pub block_height: u64,
    /// Present when the request was made without `tx_metadata`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
    /// Full transaction object, present with `tx_metadata=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx: Option<serde_json::Value>,
}

/// Page returned by `/extended/v1/tokens/nft/holdings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonFungibleTokenHoldingsList {
    pub limit: u32,
    pub offset: u32,
    pub total: u64,
    #[serde(default)]
    pub results: Vec<NonFungibleTokenHolding>,
}
