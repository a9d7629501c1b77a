//! Ledger errors and their mapping to API errors

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use super::storage::StorageError;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Order has no items")]
    EmptyItems,

    #[error("Order item {index} is malformed: {reason}")]
    InvalidItem { index: usize, reason: String },

    #[error("Customer name is required")]
    MissingCustomerName,

    #[error("Unsupported order status: {0}")]
    InvalidStatus(String),

    #[error("Order not found: {0}")]
    OrderNotFound(u64),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Storage(e) => {
                tracing::error!(error = %e, "Order storage error");
                AppError::with_message(ErrorCode::StorageError, "服务器错误：订单存储失败")
            }
            LedgerError::EmptyItems => AppError::new(ErrorCode::OrderEmpty),
            LedgerError::InvalidItem { index, .. } => AppError::validation(format!(
                "第 {} 件商品信息不完整",
                index + 1
            )),
            LedgerError::MissingCustomerName => AppError::new(ErrorCode::CustomerNameRequired),
            LedgerError::InvalidStatus(_) => AppError::new(ErrorCode::InvalidOrderStatus),
            LedgerError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, format!("未找到订单ID：{}", id))
            }
        }
    }
}
