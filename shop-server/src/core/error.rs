use thiserror::Error;

use crate::orders::StorageError;

/// 启动和运行期错误 (请求级错误见 [`shared::AppError`])
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("无法创建工作目录 {path}: {source}")]
    WorkDir {
        path: String,
        source: std::io::Error,
    },

    #[error("无法打开订单数据库: {0}")]
    OrderStorage(#[from] StorageError),

    #[error("无法监听端口 {port}: {source}")]
    Bind { port: u16, source: std::io::Error },

    #[error("HTTP 服务异常退出: {0}")]
    Serve(std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
