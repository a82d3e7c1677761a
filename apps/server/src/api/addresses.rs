use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use explorer_core::{constants::MAX_NFT_HOLDINGS_LIMIT, holders::PageRequest, tokens::contract_id_of};
use explorer_stacks_api::NonFungibleTokenHolding;
use serde::{Deserialize, Serialize};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NftHoldingsQuery {
    limit: Option<u32>,
    offset: Option<u32>,
    tx_metadata: Option<bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NftHoldingRow {
    #[serde(flatten)]
    holding: NonFungibleTokenHolding,
    is_risky_contract: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NftHoldingsResponse {
    limit: u32,
    offset: u32,
    total: u64,
    results: Vec<NftHoldingRow>,
}

async fn get_nft_holdings(
    Path(principal): Path<String>,
    Query(query): Query<NftHoldingsQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<NftHoldingsResponse>> {
    let page = PageRequest::new(
        query.limit.unwrap_or(MAX_NFT_HOLDINGS_LIMIT),
        query.offset.unwrap_or(0),
    );
    let list = state
        .holders_service
        .get_nft_holdings(&principal, page, query.tx_metadata.unwrap_or(false))
        .await?;

    let results = list
        .results
        .into_iter()
        .map(|holding| NftHoldingRow {
            is_risky_contract: state
                .token_lists
                .is_risky_nft_contract(contract_id_of(&holding.asset_identifier)),
            holding,
        })
        .collect();

    Ok(Json(NftHoldingsResponse {
        limit: list.limit,
        offset: list.offset,
        total: list.total,
        results,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/addresses/{principal}/nft-holdings",
        get(get_nft_holdings),
    )
}
