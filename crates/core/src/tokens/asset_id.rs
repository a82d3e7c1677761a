//! Contract and asset identifier parsing and validation.
//!
//! ## Formats
//!
//! | Kind | Pattern | Example |
//! |------|---------|---------|
//! | Contract | `{principal}.{contract}` | `SP3K8BC0PPEVCV7NZ6QSRWPQ2JE9E5B6N3PA0KBR9.token-alex` |
//! | Asset | `{principal}.{contract}::{asset}` | `SP3K8BC0PPEVCV7NZ6QSRWPQ2JE9E5B6N3PA0KBR9.token-alex::alex` |
//!
//! ```
//! use explorer_core::tokens::{parse_asset_identifier, validate_contract_id};
//!
//! assert!(validate_contract_id("SP3K8BC0PPEVCV7NZ6QSRWPQ2JE9E5B6N3PA0KBR9.token-alex"));
//!
//! let parsed = parse_asset_identifier(
//!     "SP3K8BC0PPEVCV7NZ6QSRWPQ2JE9E5B6N3PA0KBR9.token-alex::alex",
//! )
//! .unwrap();
//! assert_eq!(parsed.contract_name, "token-alex");
//! assert_eq!(parsed.asset_name, "alex");
//! ```

use lazy_static::lazy_static;
use regex::Regex;

/// Separator between contract id and asset name.
pub const ASSET_NAME_DELIMITER: &str = "::";

/// Separator between principal and contract name.
pub const CONTRACT_NAME_DELIMITER: char = '.';

lazy_static! {
    /// Standard principal: `S`, a version character, then the c32 encoded
    /// hash and checksum.
    static ref STANDARD_PRINCIPAL_REGEX: Regex =
        Regex::new(r"^S[PMTN][0-9A-HJKMNP-TV-Z]{38,39}$").expect("Invalid regex pattern");

    /// Clarity contract name.
    static ref CONTRACT_NAME_REGEX: Regex =
        Regex::new(r"^[a-zA-Z]([a-zA-Z0-9]|[-_])*$").expect("Invalid regex pattern");
}

const MAX_CONTRACT_NAME_LENGTH: usize = 128;

/// Parts of a fully qualified asset identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAssetIdentifier {
    pub principal: String,
    pub contract_name: String,
    pub asset_name: String,
}

impl ParsedAssetIdentifier {
    /// `{principal}.{contract}`
    pub fn contract_id(&self) -> String {
        format!(
            "{}{}{}",
            self.principal, CONTRACT_NAME_DELIMITER, self.contract_name
        )
    }
}

/// Whether `address` is a standard (non-contract) principal.
pub fn validate_standard_principal(address: &str) -> bool {
    STANDARD_PRINCIPAL_REGEX.is_match(address)
}

/// Whether `contract_id` is `{standard principal}.{contract name}`.
pub fn validate_contract_id(contract_id: &str) -> bool {
    match contract_id.split_once(CONTRACT_NAME_DELIMITER) {
        Some((principal, name)) => {
            validate_standard_principal(principal)
                && name.len() <= MAX_CONTRACT_NAME_LENGTH
                && CONTRACT_NAME_REGEX.is_match(name)
        }
        None => false,
    }
}

/// Splits `{principal}.{contract}::{asset}` into its parts.
///
/// Returns `None` when the identifier has no asset name or its contract part
/// is not a valid contract id.
pub fn parse_asset_identifier(asset_identifier: &str) -> Option<ParsedAssetIdentifier> {
    let (contract_id, asset_name) = asset_identifier.split_once(ASSET_NAME_DELIMITER)?;
    if asset_name.is_empty() || !validate_contract_id(contract_id) {
        return None;
    }
    let (principal, contract_name) = contract_id.split_once(CONTRACT_NAME_DELIMITER)?;
    Some(ParsedAssetIdentifier {
        principal: principal.to_string(),
        contract_name: contract_name.to_string(),
        asset_name: asset_name.to_string(),
    })
}

/// Contract id part of an asset identifier, or the input when there is no
/// `::` suffix.
pub fn contract_id_of(asset_identifier: &str) -> &str {
    asset_identifier
        .split_once(ASSET_NAME_DELIMITER)
        .map(|(contract_id, _)| contract_id)
        .unwrap_or(asset_identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRINCIPAL: &str = "SP1J45NVEGQ7ZA4M57TGF0RAB00TMYCYG00X8EF5B";

    #[test]
    fn test_validate_standard_principal() {
        assert!(validate_standard_principal(PRINCIPAL));
        assert!(validate_standard_principal(
            "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM"
        ));
        assert!(!validate_standard_principal(""));
        assert!(!validate_standard_principal("not-a-contract"));
        // `I`, `L`, `O` and `U` are not in the c32 alphabet.
        assert!(!validate_standard_principal(
            "SP1J45NVEGQ7ZA4M57TGF0RAB00TMYCYG00X8EF5I"
        ));
    }

    #[test]
    fn test_validate_contract_id() {
        assert!(validate_contract_id(&format!("{PRINCIPAL}.StacksDao")));
        assert!(validate_contract_id(&format!("{PRINCIPAL}.amm-pool_v2")));
        assert!(!validate_contract_id(PRINCIPAL));
        assert!(!validate_contract_id(&format!("{PRINCIPAL}.")));
        assert!(!validate_contract_id(&format!("{PRINCIPAL}.1token")));
        assert!(!validate_contract_id(&format!(
            "{PRINCIPAL}.{}",
            "a".repeat(MAX_CONTRACT_NAME_LENGTH + 1)
        )));
    }

    #[test]
    fn test_parse_asset_identifier() {
        let parsed = parse_asset_identifier(&format!("{PRINCIPAL}.wrapped-btc::wbtc")).unwrap();
        assert_eq!(parsed.principal, PRINCIPAL);
        assert_eq!(parsed.contract_name, "wrapped-btc");
        assert_eq!(parsed.asset_name, "wbtc");
        assert_eq!(parsed.contract_id(), format!("{PRINCIPAL}.wrapped-btc"));
    }

    #[test]
    fn test_parse_asset_identifier_rejects_incomplete() {
        assert!(parse_asset_identifier(&format!("{PRINCIPAL}.wrapped-btc")).is_none());
        assert!(parse_asset_identifier(&format!("{PRINCIPAL}.wrapped-btc::")).is_none());
        assert!(parse_asset_identifier("garbage::wbtc").is_none());
    }

    #[test]
    fn test_contract_id_of() {
        assert_eq!(
            contract_id_of(&format!("{PRINCIPAL}.wrapped-btc::wbtc")),
            format!("{PRINCIPAL}.wrapped-btc")
        );
        assert_eq!(contract_id_of("stx"), "stx");
    }
}
