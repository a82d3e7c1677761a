//! Curated token lists used to badge or warn about tokens.

use regex::Regex;

use super::asset_id::validate_contract_id;
use crate::constants::SBTC_CONTRACT_ID;
use crate::errors::{Error, Result};

/// Default risky NFT contract rule.
pub const DEFAULT_RISKY_NFT_RULES: &[&str] = &[r"\.StacksDao$"];

/// Verified, risky and sBTC-related token lists.
#[derive(Debug, Clone)]
pub struct TokenLists {
    verified_tokens: Vec<String>,
    risky_tokens: Vec<String>,
    legit_sbtc_derivatives: Vec<String>,
    sbtc_contract_id: String,
    risky_nft_rules: Vec<Regex>,
}

impl Default for TokenLists {
    fn default() -> Self {
        Self {
            verified_tokens: Vec::new(),
            risky_tokens: Vec::new(),
            legit_sbtc_derivatives: Vec::new(),
            sbtc_contract_id: SBTC_CONTRACT_ID.to_string(),
            risky_nft_rules: DEFAULT_RISKY_NFT_RULES
                .iter()
                .filter_map(|rule| Regex::new(rule).ok())
                .collect(),
        }
    }
}

impl TokenLists {
    pub fn new(verified_tokens: Vec<String>, risky_tokens: Vec<String>) -> Self {
        Self {
            verified_tokens,
            risky_tokens,
            ..Self::default()
        }
    }

    pub fn with_legit_sbtc_derivatives(mut self, derivatives: Vec<String>) -> Self {
        self.legit_sbtc_derivatives = derivatives;
        self
    }

    pub fn with_sbtc_contract_id(mut self, contract_id: impl Into<String>) -> Self {
        self.sbtc_contract_id = contract_id.into();
        self
    }

    /// Replaces the risky NFT rules. Fails on the first invalid pattern.
    pub fn with_risky_nft_rules(mut self, patterns: &[&str]) -> Result<Self> {
        self.risky_nft_rules = patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| {
                    Error::Validation(format!("Invalid risky NFT rule '{}': {}", pattern, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    /// Exact, case-sensitive match.
    pub fn is_verified_token(&self, token_id: &str) -> bool {
        self.verified_tokens.iter().any(|t| t == token_id)
    }

    /// Exact, case-sensitive match.
    pub fn is_risky_token(&self, token_id: &str) -> bool {
        self.risky_tokens.iter().any(|t| t == token_id)
    }

    pub fn is_sbtc(&self, contract_id: &str) -> bool {
        !contract_id.is_empty() && contract_id == self.sbtc_contract_id
    }

    /// Whether a token impersonating sBTC should carry a warning.
    pub fn show_sbtc_token_alert(&self, name: &str, symbol: &str, contract_id: &str) -> bool {
        references_sbtc(name, symbol)
            && !self.is_sbtc(contract_id)
            && !self.legit_sbtc_derivatives.iter().any(|c| c == contract_id)
    }

    /// False unless `contract_id` is a valid contract id matching a rule.
    pub fn is_risky_nft_contract(&self, contract_id: &str) -> bool {
        if contract_id.is_empty() || !validate_contract_id(contract_id) {
            return false;
        }
        self.risky_nft_rules
            .iter()
            .any(|rule| rule.is_match(contract_id))
    }
}

/// Whether the name or symbol mentions sBTC. Both must be present.
pub fn references_sbtc(name: &str, symbol: &str) -> bool {
    if name.is_empty() || symbol.is_empty() {
        return false;
    }
    name.to_lowercase().contains("sbtc") || symbol.to_lowercase().contains("sbtc")
}
