//! Pricing route handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::requests::{BasePriceUpdate, PriceQuery, QuoteInput, SetPriceQuery};
use super::responses::CostResponse;
use super::services;

/// Pricing routes
pub fn router() -> Router<AppState> {
    Router::new().route("/prices", get(get_price).put(put_price))
}

/// GET /prices - quote a lift pass
async fn get_price(
    State(state): State<AppState>,
    query: std::result::Result<Query<PriceQuery>, QueryRejection>,
) -> Result<Json<CostResponse>> {
    let Query(query) = query?;
    let input = QuoteInput::try_from(query)?;
    let cost = services::quote_price(&state.store, &state.cache, input).await?;
    Ok(Json(CostResponse { cost }))
}

/// PUT /prices - replace the base price of a pass type
async fn put_price(
    State(state): State<AppState>,
    query: std::result::Result<Query<SetPriceQuery>, QueryRejection>,
) -> Result<StatusCode> {
    let Query(query) = query?;
    let update = BasePriceUpdate::try_from(query)?;
    services::set_base_price(&state.store, &state.cache, update).await?;
    Ok(StatusCode::OK)
}
