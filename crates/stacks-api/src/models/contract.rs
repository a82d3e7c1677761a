use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `/extended/v1/contract/{contract_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractInfo {
    #[serde(default)]
    pub tx_id: Option<String>,
    #[serde(default)]
    pub canonical: Option<bool>,
    pub contract_id: String,
    #[serde(default)]
    pub block_height: Option<u64>,
    #[serde(default)]
    pub clarity_version: Option<u32>,
    #[serde(default)]
    pub source_code: Option<String>,
    /// Contract interface, JSON encoded as a string by the API.
    #[serde(default)]
    pub abi: Option<String>,
}

impl ContractInfo {
    /// Name of the first fungible token the contract defines, read from the ABI.
    ///
    /// Returns `None` when the ABI is missing, is not valid JSON, or declares no
    /// fungible tokens.
    pub fn first_fungible_token_name(&self) -> Option<String> {
        let abi: Value = serde_json::from_str(self.abi.as_deref()?).ok()?;
        abi.get("fungible_tokens")?
            .as_array()?
            .first()?
            .get("name")?
            .as_str()
            .map(str::to_string)
    }
}
