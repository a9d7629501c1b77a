//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`products`] - 前台商品列表
//! - [`orders`] - 下单、查单、脱敏订单列表
//! - [`admin`] - 后台管理 (需要管理密码)

pub mod admin;
pub mod health;
pub mod orders;
pub mod products;

pub use shared::error::{AppError, AppResult};
pub use shared::extract::AppJson;
