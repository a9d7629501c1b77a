//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::ErrorCode;
use shared::models::{CreateOrderRequest, CreateOrderResponse, Order, PublicOrder};

use crate::api::{AppError, AppJson, AppResult};
use crate::core::ServerState;
use crate::orders::LedgerError;

const ORDER_CREATED: &str = "订单已创建（当前为测试环境，未实际发起支付）";

/// POST /api/orders - 下单
///
/// 不校验商品是否存在，也不扣库存
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<CreateOrderRequest>,
) -> AppResult<Json<CreateOrderResponse>> {
    let order = state.orders.place(payload)?;
    Ok(Json(CreateOrderResponse {
        message: ORDER_CREATED.to_string(),
        order_id: order.id,
    }))
}

/// GET /api/orders/{id} - 查单
///
/// 非数字 ID 也按 "订单不存在" 处理
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let id = id
        .trim()
        .parse::<u64>()
        .map_err(|_| AppError::new(ErrorCode::OrderNotFound))?;

    match state.orders.get(id) {
        Ok(order) => Ok(Json(order)),
        Err(LedgerError::OrderNotFound(_)) => Err(AppError::new(ErrorCode::OrderNotFound)),
        Err(e) => Err(e.into()),
    }
}

/// GET /api/public-orders - 脱敏订单列表
pub async fn list_public(State(state): State<ServerState>) -> AppResult<Json<Vec<PublicOrder>>> {
    Ok(Json(state.orders.list_public()?))
}
