//! Admin API 模块
//!
//! 所有接口都要带管理密码：GET 放在查询参数里，POST 放在 JSON body 里

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", admin_routes())
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/orders", get(handler::list_orders))
        .route("/export-orders", get(handler::export_orders))
        .route("/add-product", post(handler::add_product))
        .route("/update-stock", post(handler::update_stock))
        .route("/delete-product", post(handler::delete_product))
        .route("/update-order-status", post(handler::update_order_status))
        .route("/delete-order", post(handler::delete_order))
}
