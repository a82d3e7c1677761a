use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Off-chain metadata document attached to a token (SIP-016).
///
/// Image fields are kept as raw JSON: indexers occasionally publish objects
/// or numbers where a URL is expected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    #[serde(default)]
    pub sip: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<Value>,
    #[serde(default)]
    pub cached_image: Option<Value>,
    #[serde(default)]
    pub cached_thumbnail_image: Option<Value>,
    #[serde(default)]
    pub attributes: Option<Value>,
    #[serde(default)]
    pub properties: Option<Value>,
}

/// Response of `/metadata/v1/ft/{token}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FtMetadataResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: Option<u32>,
    /// Raw integer supply as a string.
    #[serde(default)]
    pub total_supply: Option<String>,
    #[serde(default)]
    pub token_uri: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_uri: Option<String>,
    #[serde(default)]
    pub image_thumbnail_uri: Option<String>,
    #[serde(default)]
    pub image_canonical_uri: Option<String>,
    #[serde(default)]
    pub tx_id: Option<String>,
    #[serde(default)]
    pub sender_address: Option<String>,
    #[serde(default)]
    pub contract_principal: Option<String>,
    #[serde(default)]
    pub asset_identifier: Option<String>,
    #[serde(default)]
    pub metadata: Option<TokenMetadata>,
}
