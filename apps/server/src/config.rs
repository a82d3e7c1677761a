use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use explorer_stacks_api::Network;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub network: Network,
    /// Overrides the network's default API URL.
    pub stacks_api_url: Option<String>,
    pub stacks_api_key: Option<String>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub verified_tokens: Vec<String>,
    pub risky_tokens: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("EXPLORER_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid EXPLORER_LISTEN_ADDR")?;
        let network = match std::env::var("EXPLORER_NETWORK") {
            Ok(value) => value
                .parse::<Network>()
                .map_err(|e| anyhow::anyhow!("Invalid EXPLORER_NETWORK: {}", e))?,
            Err(_) => Network::default(),
        };
        let stacks_api_url = non_empty_var("EXPLORER_STACKS_API_URL");
        let stacks_api_key = non_empty_var("EXPLORER_STACKS_API_KEY");
        let cors_allow = std::env::var("EXPLORER_CORS_ALLOW_ORIGINS")
            .map(|v| split_list(&v))
            .unwrap_or_else(|_| vec!["*".to_string()]);
        let timeout_ms: u64 = std::env::var("EXPLORER_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let verified_tokens = std::env::var("EXPLORER_VERIFIED_TOKENS")
            .map(|v| split_list(&v))
            .unwrap_or_default();
        let risky_tokens = std::env::var("EXPLORER_RISKY_TOKENS")
            .map(|v| split_list(&v))
            .unwrap_or_default();

        Ok(Self {
            listen_addr,
            network,
            stacks_api_url,
            stacks_api_key,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            verified_tokens,
            risky_tokens,
        })
    }

    /// Base URL of the chain API this server talks to.
    pub fn api_url(&self) -> String {
        self.stacks_api_url
            .clone()
            .unwrap_or_else(|| self.network.api_url().to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            network: Network::default(),
            stacks_api_url: None,
            stacks_api_key: None,
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
            verified_tokens: Vec::new(),
            risky_tokens: Vec::new(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
