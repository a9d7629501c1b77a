//! Order ledger
//!
//! # 模块结构
//!
//! ```text
//! orders/
//! ├── storage.rs     # redb 持久化 + 订单号分配
//! ├── ledger.rs      # 下单校验、状态变更、删除
//! ├── projection.rs  # 前台脱敏订单列表
//! ├── export.rs      # CSV 导出
//! └── error.rs       # LedgerError -> AppError
//! ```

pub mod error;
pub mod export;
pub mod ledger;
pub mod projection;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use ledger::OrderLedger;
pub use projection::mask_name;
pub use storage::{OrderStorage, StorageError, StorageResult};
