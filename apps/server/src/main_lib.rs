use std::sync::Arc;

use explorer_core::{
    holders::{HoldersService, HoldersServiceTrait},
    tokens::{TokenInfoService, TokenInfoServiceTrait, TokenLists},
};
use explorer_stacks_api::{
    RateLimitConfig, StacksApi, StacksApiClient, StacksApiClientConfig,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub token_info_service: Arc<dyn TokenInfoServiceTrait>,
    pub holders_service: Arc<dyn HoldersServiceTrait>,
    pub token_lists: Arc<TokenLists>,
}

pub fn init_tracing() {
    let log_format = std::env::var("EXPLORER_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Builds the HTTP chain API client from the config.
pub fn build_stacks_api(config: &Config) -> Arc<dyn StacksApi> {
    let mut client_config = StacksApiClientConfig::for_network(config.network);
    client_config.base_url = config.api_url();
    if let Some(key) = &config.stacks_api_key {
        client_config.api_key = Some(key.clone());
        client_config.rate_limit = RateLimitConfig::with_api_key();
    }
    Arc::new(StacksApiClient::new(client_config))
}

pub fn build_state(config: &Config) -> Arc<AppState> {
    let api = build_stacks_api(config);
    tracing::info!("Chain API in use: {}", api.base_url());
    build_state_with_api(config, api)
}

/// Wires services on top of an existing chain API implementation.
pub fn build_state_with_api(config: &Config, api: Arc<dyn StacksApi>) -> Arc<AppState> {
    let token_lists = TokenLists::new(config.verified_tokens.clone(), config.risky_tokens.clone());
    Arc::new(AppState {
        token_info_service: Arc::new(TokenInfoService::new(api.clone())),
        holders_service: Arc::new(HoldersService::new(api)),
        token_lists: Arc::new(token_lists),
    })
}
