//! Error codes for the storefront API
//!
//! - 0xxx: General errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 6xxx: Product errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Malformed request (bad JSON, wrong field type)
    InvalidRequest = 5,

    // ==================== 2xxx: Permission ====================
    /// Shared admin password did not match
    InvalidAdminPassword = 2001,

    // ==================== 4xxx: Order ====================
    OrderNotFound = 4001,
    OrderEmpty = 4002,
    CustomerNameRequired = 4003,
    InvalidOrderStatus = 4004,

    // ==================== 6xxx: Product ====================
    ProductNotFound = 6001,

    // ==================== 9xxx: System ====================
    StorageError = 9002,
}

impl ErrorCode {
    /// Numeric value of the code
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message shown to the shop front-end
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "参数校验失败",
            ErrorCode::InvalidRequest => "请求格式错误",

            ErrorCode::InvalidAdminPassword => "管理密码错误",

            ErrorCode::OrderNotFound => "订单不存在",
            ErrorCode::OrderEmpty => "订单为空",
            ErrorCode::CustomerNameRequired => "请填写姓名",
            ErrorCode::InvalidOrderStatus => "不支持的状态值",

            ErrorCode::ProductNotFound => "商品不存在",

            ErrorCode::StorageError => "服务器错误：存储读写失败",
        }
    }

    /// Whether this code describes a server-side failure
    pub const fn is_system(&self) -> bool {
        matches!(self, ErrorCode::StorageError)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
