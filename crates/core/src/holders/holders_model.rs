use serde::Serialize;

/// One row of a token's holders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderRow {
    /// 1-based rank across all pages.
    pub index: u64,
    pub address: String,
    pub is_contract: bool,
    /// Decimal-adjusted balance with thousands separators.
    pub balance: String,
    /// Formatted share of total supply, or `"N/A"`.
    pub holding: String,
}

/// A page of holder rows plus what a table needs to paginate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldersTablePage {
    pub rows: Vec<HolderRow>,
    pub total: u64,
    pub page_index: u32,
    pub page_size: u32,
}
