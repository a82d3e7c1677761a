//! Tokens module - identifiers, curated lists, and token summaries.

mod asset_id;
mod metadata;
mod ticker;
mod token_lists;
mod tokens_model;
mod tokens_service;
mod tokens_traits;

#[cfg(test)]
mod tokens_service_tests;

pub use asset_id::{
    contract_id_of, parse_asset_identifier, validate_contract_id, validate_standard_principal,
    ParsedAssetIdentifier, ASSET_NAME_DELIMITER, CONTRACT_NAME_DELIMITER,
};
pub use metadata::token_image_url;
pub use ticker::derive_token_ticker_from_asset_id;
pub use token_lists::{references_sbtc, TokenLists, DEFAULT_RISKY_NFT_RULES};
pub use tokens_model::BasicTokenInfo;
pub use tokens_service::TokenInfoService;
pub use tokens_traits::TokenInfoServiceTrait;
