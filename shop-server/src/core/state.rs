//! 服务器状态
//!
//! 所有 handler 共享的资源，克隆成本很低 (内部都是 `Arc`)

use crate::auth::{AdminGate, SharedSecretAuth};
use crate::catalog::ProductStore;
use crate::core::{Config, Result, ServerError};
use crate::orders::{OrderLedger, OrderStorage};

#[derive(Debug, Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 商品目录 (products.json)
    pub catalog: ProductStore,
    /// 订单账本 (orders.redb)
    pub orders: OrderLedger,
    /// 后台密码校验
    pub admin: AdminGate,
}

impl ServerState {
    pub fn new(config: Config, catalog: ProductStore, orders: OrderLedger, admin: AdminGate) -> Self {
        Self {
            config,
            catalog,
            orders,
            admin,
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 创建工作目录
    /// 2. 打开订单数据库
    /// 3. 绑定商品文件和管理密码
    pub fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir().map_err(|source| ServerError::WorkDir {
            path: config.work_dir.clone(),
            source,
        })?;

        let storage = OrderStorage::open(config.orders_db_path())?;
        let orders = OrderLedger::new(storage);
        let catalog = ProductStore::new(config.catalog_path());
        let admin = AdminGate::new(SharedSecretAuth::new(config.admin_password.clone()));

        tracing::info!(
            work_dir = %config.work_dir,
            catalog = %catalog.path().display(),
            "Server state initialized"
        );

        Ok(Self::new(config.clone(), catalog, orders, admin))
    }

    /// 静态前端目录 (不存在时返回 None)
    pub fn frontend_dir(&self) -> Option<std::path::PathBuf> {
        let dir = std::path::PathBuf::from(&self.config.frontend_dir);
        dir.is_dir().then_some(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_work_dir() {
        let dir = TempDir::new().unwrap();
        let work_dir = dir.path().join("nested/data");
        let config = Config::with_overrides(work_dir.to_string_lossy(), 0);

        let state = ServerState::initialize(&config).unwrap();
        assert!(work_dir.is_dir());
        assert!(config.orders_db_path().exists());
        assert!(state.orders.is_empty().unwrap());
        assert_eq!(state.catalog.path(), config.catalog_path());
    }
}
