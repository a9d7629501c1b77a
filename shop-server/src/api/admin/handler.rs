//! Admin API Handlers

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use http::{StatusCode, header};
use shared::error::MessageResponse;
use shared::models::{
    AddProductRequest, AddProductResponse, AdminQuery, DeleteOrderRequest, DeleteProductRequest,
    Order, UpdateOrderStatusRequest, UpdateStockRequest,
};
use shared::types::NumberLike;

use crate::api::{AppError, AppJson, AppResult};
use crate::catalog::{self, parse_stock};
use crate::core::ServerState;
use crate::orders::export::{CSV_CONTENT_DISPOSITION, CSV_CONTENT_TYPE};

/// GET /api/admin/orders?password= - 完整订单列表
pub async fn list_orders(
    State(state): State<ServerState>,
    Query(query): Query<AdminQuery>,
) -> AppResult<Json<Vec<Order>>> {
    state
        .admin
        .require_admin(query.password.as_deref(), "list_orders")?;
    Ok(Json(state.orders.list_all()?))
}

/// GET /api/admin/export-orders?password= - 导出 CSV
///
/// 密码错误时返回纯文本而不是 JSON，浏览器直接打开链接也能看懂
pub async fn export_orders(
    State(state): State<ServerState>,
    Query(query): Query<AdminQuery>,
) -> Response {
    if let Err(e) = state
        .admin
        .require_admin(query.password.as_deref(), "export_orders")
    {
        return (StatusCode::FORBIDDEN, e.message).into_response();
    }

    match state.orders.export_csv() {
        Ok(csv) => (
            [
                (header::CONTENT_TYPE, CSV_CONTENT_TYPE),
                (header::CONTENT_DISPOSITION, CSV_CONTENT_DISPOSITION),
            ],
            csv,
        )
            .into_response(),
        Err(e) => AppError::from(e).into_response(),
    }
}

/// POST /api/admin/add-product - 新增商品
pub async fn add_product(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<AddProductRequest>,
) -> AppResult<Json<AddProductResponse>> {
    state
        .admin
        .require_admin(payload.password.as_deref(), "add_product")?;

    let input = catalog::new_product(payload)?;
    let product = state.catalog.add(input).await?;

    Ok(Json(AddProductResponse {
        message: "新增商品成功".to_string(),
        product,
    }))
}

/// POST /api/admin/update-stock - 修改库存
pub async fn update_stock(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<UpdateStockRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .admin
        .require_admin(payload.password.as_deref(), "update_stock")?;

    let id = required_id(payload.product_id.as_ref(), "请填写商品ID")?;
    let stock = match payload.stock.as_ref().filter(|s| !s.is_blank()) {
        Some(stock) => parse_stock(stock)?,
        None => return Err(AppError::validation("请填写库存")),
    };

    let product = state.catalog.update_stock(id, stock).await?;
    Ok(Json(MessageResponse::new(format!(
        "已将「{}」库存改为 {}",
        product.name, product.stock
    ))))
}

/// POST /api/admin/delete-product - 删除商品
pub async fn delete_product(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<DeleteProductRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .admin
        .require_admin(payload.password.as_deref(), "delete_product")?;

    let id = required_id(payload.product_id.as_ref(), "请填写商品ID")?;
    let removed = state.catalog.delete(id).await?;

    crate::security_log!(
        "INFO",
        "product_deleted",
        product_id = removed.id,
        name = removed.name.as_str()
    );
    Ok(Json(MessageResponse::new(format!(
        "已删除商品「{}」（ID：{}）",
        removed.name, removed.id
    ))))
}

/// POST /api/admin/update-order-status - 修改订单状态
///
/// 状态值接受 `placed` / `paid` 或中文标签，不限制先后顺序
pub async fn update_order_status(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<UpdateOrderStatusRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .admin
        .require_admin(payload.password.as_deref(), "update_order_status")?;

    let status = payload.status.unwrap_or_default();
    let id = required_id(payload.order_id.as_ref(), "请填写订单ID")?;
    let order = state.orders.update_status(id, status.trim())?;

    Ok(Json(MessageResponse::new(format!(
        "订单 {} 状态已更新为「{}」",
        order.id,
        order.status.label()
    ))))
}

/// POST /api/admin/delete-order - 删除订单
pub async fn delete_order(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<DeleteOrderRequest>,
) -> AppResult<Json<MessageResponse>> {
    state
        .admin
        .require_admin(payload.password.as_deref(), "delete_order")?;

    let id = required_id(payload.order_id.as_ref(), "请填写订单ID")?;
    let removed = state.orders.delete(id)?;

    crate::security_log!("INFO", "order_deleted", order_id = removed.id);
    Ok(Json(MessageResponse::new(format!(
        "已删除订单 {}（{}）",
        removed.id, removed.customer.name
    ))))
}

/// Missing, blank or non-integer ids are a 400
fn required_id(value: Option<&NumberLike>, message: &'static str) -> AppResult<u64> {
    value
        .filter(|v| !v.is_blank())
        .and_then(NumberLike::as_u64)
        .ok_or_else(|| AppError::validation(message))
}
