use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use explorer_core::{
    amounts::{calculate_holding_percentage, format_holding_percentage},
    constants::DEFAULT_HOLDING_PRECISION,
    tokens::derive_token_ticker_from_asset_id,
};
use serde::{Deserialize, Serialize};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HoldingPercentageQuery {
    balance: Option<String>,
    total_supply: Option<String>,
    precision: Option<u32>,
}

#[derive(Serialize)]
struct HoldingPercentageResponse {
    percentage: Option<f64>,
    formatted: String,
}

async fn get_holding_percentage(
    Query(query): Query<HoldingPercentageQuery>,
) -> ApiResult<Json<HoldingPercentageResponse>> {
    let precision = query.precision.unwrap_or(DEFAULT_HOLDING_PRECISION);
    let percentage = match (query.balance, query.total_supply) {
        (Some(balance), Some(total_supply)) => {
            calculate_holding_percentage(balance, total_supply, precision)
        }
        _ => None,
    };
    Ok(Json(HoldingPercentageResponse {
        percentage,
        formatted: format_holding_percentage(percentage),
    }))
}

#[derive(Serialize)]
struct TickerResponse {
    ticker: String,
}

async fn get_ticker(Path(asset_id): Path<String>) -> ApiResult<Json<TickerResponse>> {
    Ok(Json(TickerResponse {
        ticker: derive_token_ticker_from_asset_id(&asset_id),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/utils/holding-percentage", get(get_holding_percentage))
        .route("/utils/ticker/{asset_id}", get(get_ticker))
}
