use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use explorer_stacks_api::{StacksApi, StacksApiError};

use super::asset_id::ASSET_NAME_DELIMITER;
use super::tokens_model::BasicTokenInfo;
use super::tokens_traits::TokenInfoServiceTrait;
use crate::amounts::ft_decimal_adjusted_balance;
use crate::errors::{Error, Result};

const TOKEN_NOT_FOUND: &str = "Token not found";

/// Builds token summaries from the metadata, contract and holders endpoints.
pub struct TokenInfoService {
    api: Arc<dyn StacksApi>,
}

impl TokenInfoService {
    pub fn new(api: Arc<dyn StacksApi>) -> Self {
        Self { api }
    }

    /// Total supply reported by the holders endpoint of the contract's first
    /// fungible token. `None` on any failure along the way.
    async fn fetch_circulating_supply(&self, token_id: &str) -> Option<String> {
        let contract = match self.api.get_contract_info(token_id).await {
            Ok(contract) => contract,
            Err(e) => {
                warn!("Failed to fetch contract info for {}: {}", token_id, e);
                return None;
            }
        };
        if contract.abi.is_none() {
            warn!("No ABI found for token {}", token_id);
            return None;
        }
        let Some(ft_name) = contract.first_fungible_token_name() else {
            warn!("No fungible tokens found in ABI of {}", token_id);
            return None;
        };

        let asset_id = format!("{}{}{}", token_id, ASSET_NAME_DELIMITER, ft_name);
        let holders = match self.api.get_ft_holders(&asset_id, 1, 0).await {
            Ok(holders) => holders,
            Err(e) => {
                warn!("Failed to fetch holders info for {}: {}", asset_id, e);
                return None;
            }
        };
        if holders.total_supply.is_empty() {
            warn!("No total supply found in holders info for {}", asset_id);
            return None;
        }
        Some(holders.total_supply)
    }
}

#[async_trait]
impl TokenInfoServiceTrait for TokenInfoService {
    async fn get_basic_token_info(&self, token_id: &str) -> Result<BasicTokenInfo> {
        if token_id.is_empty() {
            return Err(Error::Validation(
                "Unable to fetch token info for this request".to_string(),
            ));
        }
        debug!("Fetching basic token info for {}", token_id);

        let (metadata, circulating_supply) = futures::join!(
            self.api.get_ft_metadata(token_id),
            self.fetch_circulating_supply(token_id)
        );
        let metadata = match metadata {
            Ok(metadata) => metadata,
            Err(StacksApiError::NotFound(_)) => {
                return Err(Error::NotFound(TOKEN_NOT_FOUND.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let (name, symbol) = match (metadata.name.as_deref(), metadata.symbol.as_deref()) {
            (Some(name), Some(symbol)) if !name.is_empty() && !symbol.is_empty() => {
                (name.to_string(), symbol.to_string())
            }
            _ => return Err(Error::NotFound(TOKEN_NOT_FOUND.to_string())),
        };

        let decimals = metadata.decimals.unwrap_or(0);

        let total_supply = match metadata.total_supply.as_deref() {
            Some(supply) if !supply.is_empty() && decimals != 0 => {
                ft_decimal_adjusted_balance(supply, decimals)
            }
            _ => None,
        };
        let circulating_supply = circulating_supply
            .and_then(|supply| ft_decimal_adjusted_balance(supply.as_str(), decimals));

        let display_name = metadata
            .metadata
            .as_ref()
            .and_then(|m| m.name.as_deref())
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or(name);

        Ok(BasicTokenInfo {
            name: display_name,
            symbol,
            total_supply,
            circulating_supply,
            image_uri: metadata.image_uri.filter(|uri| !uri.is_empty()),
        })
    }
}
