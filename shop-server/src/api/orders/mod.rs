//! Order API 模块
//!
//! 顾客侧接口：下单、按 ID 查单、脱敏订单列表

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/orders", post(handler::create))
        .route("/api/orders/{id}", get(handler::get_by_id))
        .route("/api/public-orders", get(handler::list_public))
}
