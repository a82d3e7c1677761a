//! HTTP client for the chain API.
//!
//! Every request carries the `x-api-key` header (empty when no key is
//! configured) and, when set, a `Referer`. Calls go through a per-endpoint
//! token bucket and transient failures are retried with exponential backoff.

mod traits;

pub use traits::StacksApi;

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::errors::StacksApiError;
use crate::models::{
    ContractInfo, FtMetadataResponse, FungibleTokenHolderList, NonFungibleTokenHoldingsList,
};
use crate::rate_limiter::{RateLimitConfig, RateLimiter};

const MAINNET_API_URL: &str = "https://api.hiro.so";
const TESTNET_API_URL: &str = "https://api.testnet.hiro.so";

const API_KEY_HEADER: &str = "x-api-key";

/// Chain the explorer is pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn api_url(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_API_URL,
            Network::Testnet => TESTNET_API_URL,
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(format!("Unknown network: {}", other)),
        }
    }
}

/// Settings for [`StacksApiClient`].
#[derive(Debug, Clone)]
pub struct StacksApiClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub referer: Option<String>,
    pub timeout: Duration,
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub rate_limit: RateLimitConfig,
}

impl StacksApiClientConfig {
    pub fn for_network(network: Network) -> Self {
        Self {
            base_url: network.api_url().to_string(),
            api_key: None,
            referer: None,
            timeout: Duration::from_secs(30),
            max_retries: 2,
            initial_backoff: Duration::from_millis(250),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl Default for StacksApiClientConfig {
    fn default() -> Self {
        Self::for_network(Network::Mainnet)
    }
}

pub struct StacksApiClient {
    client: Client,
    config: StacksApiClientConfig,
    rate_limiter: RateLimiter,
}

impl StacksApiClient {
    pub fn new(mut config: StacksApiClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        config.base_url = config.base_url.trim_end_matches('/').to_string();
        let rate_limiter = RateLimiter::new(config.rate_limit.clone());

        Self {
            client,
            config,
            rate_limiter,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    /// GET `path` and decode the JSON body, retrying transient failures.
    async fn fetch<T: DeserializeOwned>(
        &self,
        family: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, StacksApiError> {
        let mut attempt = 0;
        let mut backoff = self.config.initial_backoff;

        loop {
            self.rate_limiter.acquire(family).await;

            match self.fetch_once(path, query).await {
                Ok(value) => return Ok(value),
                Err(err) if err.retry_class().is_retryable() && attempt < self.config.max_retries => {
                    attempt += 1;
                    warn!(
                        "Request to {} failed ({}), retry {}/{} in {:?}",
                        path, err, attempt, self.config.max_retries, backoff
                    );
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn fetch_once<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, StacksApiError> {
        let mut request = self
            .client
            .get(self.url(path))
            .header(
                API_KEY_HEADER,
                self.config.api_key.as_deref().unwrap_or_default(),
            )
            .query(query);

        if let Some(referer) = &self.config.referer {
            request = request.header(reqwest::header::REFERER, referer);
        }

        debug!("Stacks API request: {} with {} params", path, query.len());

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                StacksApiError::Timeout {
                    endpoint: path.to_string(),
                }
            } else {
                StacksApiError::Network(e)
            }
        })?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(StacksApiError::NotFound(path.to_string()));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(StacksApiError::RateLimited {
                endpoint: path.to_string(),
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StacksApiError::Http {
                status: status.as_u16(),
                endpoint: path.to_string(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| StacksApiError::Parse {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl StacksApi for StacksApiClient {
    fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_ft_holders(
        &self,
        token: &str,
        limit: u32,
        offset: u32,
    ) -> Result<FungibleTokenHolderList, StacksApiError> {
        let path = format!("/extended/v1/tokens/ft/{}/holders", urlencoding::encode(token));
        let query = [("limit", limit.to_string()), ("offset", offset.to_string())];
        self.fetch("holders", &path, &query).await
    }

    async fn get_nft_holdings(
        &self,
        principal: &str,
        limit: u32,
        offset: u32,
        tx_metadata: bool,
    ) -> Result<NonFungibleTokenHoldingsList, StacksApiError> {
        let query = [
            ("principal", principal.to_string()),
            ("limit", limit.to_string()),
            ("offset", offset.to_string()),
            ("tx_metadata", tx_metadata.to_string()),
        ];
        self.fetch("nft-holdings", "/extended/v1/tokens/nft/holdings", &query)
            .await
    }

    async fn get_ft_metadata(&self, token: &str) -> Result<FtMetadataResponse, StacksApiError> {
        let path = format!("/metadata/v1/ft/{}", urlencoding::encode(token));
        self.fetch("metadata", &path, &[]).await
    }

    async fn get_contract_info(&self, contract_id: &str) -> Result<ContractInfo, StacksApiError> {
        let path = format!("/extended/v1/contract/{}", urlencoding::encode(contract_id));
        self.fetch("contract", &path, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_urls() {
        assert_eq!(Network::Mainnet.api_url(), "https://api.hiro.so");
        assert_eq!(Network::Testnet.api_url(), "https://api.testnet.hiro.so");
    }

    #[test]
    fn test_network_from_str() {
        assert_eq!("mainnet".parse::<Network>(), Ok(Network::Mainnet));
        assert_eq!(" Testnet ".parse::<Network>(), Ok(Network::Testnet));
        assert!("devnet".parse::<Network>().is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = StacksApiClient::new(StacksApiClientConfig {
            base_url: "http://localhost:3999/".to_string(),
            ..Default::default()
        });
        assert_eq!(client.base_url(), "http://localhost:3999");
        assert_eq!(
            client.url("/extended/v1/contract/x"),
            "http://localhost:3999/extended/v1/contract/x"
        );
    }

    #[test]
    fn test_default_config_targets_mainnet() {
        let config = StacksApiClientConfig::default();
        assert_eq!(config.base_url, MAINNET_API_URL);
        assert_eq!(config.max_retries, 2);
        assert!(config.api_key.is_none());
    }
}
