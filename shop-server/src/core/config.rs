use std::fmt;
use std::path::PathBuf;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (products.json, orders.redb) |
/// | HTTP_PORT / PORT | 3000 | HTTP 服务端口 |
/// | ADMIN_PASSWORD | 123 | 后台管理密码 |
/// | FRONTEND_DIR | ./frontend | 前端静态文件目录 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志文件目录，不设置则只输出到终端 |
/// | ENVIRONMENT | development | 运行环境 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/srv/shop ADMIN_PASSWORD=secret cargo run
/// ```
#[derive(Clone)]
pub struct Config {
    /// 工作目录，存放商品文件和订单数据库
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 后台管理密码
    pub admin_password: String,
    /// 前端静态文件目录
    pub frontend_dir: String,
    /// 日志级别
    pub log_level: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
    /// 运行环境: development | production
    pub environment: String,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .or_else(|_| std::env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "123".into()),
            frontend_dir: std::env::var("FRONTEND_DIR").unwrap_or_else(|_| "./frontend".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// products.json 路径
    pub fn catalog_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("products.json")
    }

    /// 订单数据库路径
    pub fn orders_db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("orders.redb")
    }

    /// 确保工作目录存在
    pub fn ensure_work_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("work_dir", &self.work_dir)
            .field("http_port", &self.http_port)
            .field("admin_password", &"***")
            .field("frontend_dir", &self.frontend_dir)
            .field("log_level", &self.log_level)
            .field("log_dir", &self.log_dir)
            .field("environment", &self.environment)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_live_in_work_dir() {
        let config = Config::with_overrides("/tmp/shop", 8080);
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.catalog_path(), PathBuf::from("/tmp/shop/products.json"));
        assert_eq!(config.orders_db_path(), PathBuf::from("/tmp/shop/orders.redb"));
    }

    #[test]
    fn test_debug_hides_password() {
        let mut config = Config::with_overrides("/tmp/shop", 8080);
        config.admin_password = "hunter2".into();
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
