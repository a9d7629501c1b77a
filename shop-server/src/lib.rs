//! Shop Server - 小商店后端
//!
//! 商品目录 (JSON 文件) + 订单账本 (redb) + 密码保护的后台接口
//!
//! # 模块结构
//!
//! - [`core`] - 配置、服务器状态、启动
//! - [`catalog`] - 商品目录
//! - [`orders`] - 订单账本、脱敏列表、CSV 导出
//! - [`auth`] - 后台密码校验
//! - [`api`] - HTTP 接口
//! - [`routes`] - 路由组装和中间件
//! - [`utils`] - 日志

pub mod api;
pub mod auth;
pub mod catalog;
pub mod core;
pub mod middleware;
pub mod orders;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use shared::error::{AppError, AppResult};

// Security logging macro
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
   _____ __
  / ___// /_  ____  ____
  \__ \/ __ \/ __ \/ __ \
 ___/ / / / / /_/ / /_/ /
/____/_/ /_/\____/ .___/
                /_/      v{}
    "#,
        env!("CARGO_PKG_VERSION")
    );
}

/// 加载 .env 并初始化日志
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty());
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
