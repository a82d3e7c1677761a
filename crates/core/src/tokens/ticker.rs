/// Short placeholder ticker derived from an asset name.
///
/// Hyphenated names take initials: the first letter of each of the first
/// three segments, or with two segments the first letter of the first and
/// the first two letters of the second. Other names take their first three
/// characters. The result is upper case.
///
/// ```
/// use explorer_core::tokens::derive_token_ticker_from_asset_id;
///
/// assert_eq!(derive_token_ticker_from_asset_id("bitcoin-wrapped-token"), "BWT");
/// assert_eq!(derive_token_ticker_from_asset_id("stacks-token"), "STO");
/// assert_eq!(derive_token_ticker_from_asset_id("bitcoin"), "BIT");
/// ```
pub fn derive_token_ticker_from_asset_id(asset_id: &str) -> String {
    let upper = asset_id.to_uppercase();
    if upper.contains('-') {
        let parts: Vec<&str> = upper.split('-').collect();
        let mut ticker = String::new();
        if parts.len() >= 3 {
            for part in parts.iter().take(3) {
                ticker.extend(part.chars().take(1));
            }
        } else {
            ticker.extend(parts[0].chars().take(1));
            ticker.extend(parts[1].chars().take(2));
        }
        return ticker;
    }
    upper.chars().take(3).collect()
}
