use serde::Serialize;

use crate::amounts::AdjustedAmount;

/// Token summary shown in a token page header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicTokenInfo {
    pub name: String,
    pub symbol: String,
    pub total_supply: Option<AdjustedAmount>,
    pub circulating_supply: Option<AdjustedAmount>,
    pub image_uri: Option<String>,
}
