use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use explorer_core::{
    constants::DEFAULT_HOLDER_LIMIT,
    holders::{HoldersTablePage, PageRequest},
    tokens::{contract_id_of, BasicTokenInfo},
    RawAmount,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenInfoResponse {
    #[serde(flatten)]
    basic: BasicTokenInfo,
    is_verified: bool,
    is_risky: bool,
    show_sbtc_alert: bool,
}

/// Token summary plus the curated-list flags the token page shows.
async fn get_token_info(
    Path(token_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TokenInfoResponse>> {
    let basic = state.token_info_service.get_basic_token_info(&token_id).await?;
    let lists = &state.token_lists;
    Ok(Json(TokenInfoResponse {
        is_verified: lists.is_verified_token(&token_id),
        is_risky: lists.is_risky_token(&token_id),
        show_sbtc_alert: lists.show_sbtc_token_alert(&basic.name, &basic.symbol, &token_id),
        basic,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HoldersQuery {
    page: Option<u32>,
    page_size: Option<u32>,
    /// Raw total supply; read from the holders endpoint when absent.
    total_supply: Option<String>,
    decimals: Option<u32>,
}

async fn get_token_holders(
    Path(asset_id): Path<String>,
    Query(query): Query<HoldersQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HoldersTablePage>> {
    if contract_id_of(&asset_id).is_empty() {
        return Err(ApiError::BadRequest("Asset identifier is required".into()));
    }
    let page_index = query.page.unwrap_or(0);
    let page_size = query.page_size.unwrap_or(DEFAULT_HOLDER_LIMIT);

    let total_supply = match query.total_supply {
        Some(total_supply) => total_supply,
        None => state
            .holders_service
            .get_holders(&asset_id, PageRequest::from_page(page_index, page_size))
            .await?
            .map(|list| list.total_supply)
            .unwrap_or_default(),
    };

    let table = state
        .holders_service
        .get_holder_rows(
            &asset_id,
            page_index,
            page_size,
            RawAmount::from(total_supply),
            query.decimals.unwrap_or(0),
        )
        .await?;
    Ok(Json(table))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tokens/{token_id}/info", get(get_token_info))
        .route("/tokens/{asset_id}/holders", get(get_token_holders))
}
