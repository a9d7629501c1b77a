//! Product API Handlers

use axum::{Json, extract::State};
use shared::models::Product;

use crate::core::ServerState;
use crate::api::AppResult;

/// GET /api/products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.catalog.list().await?;
    Ok(Json(products))
}
