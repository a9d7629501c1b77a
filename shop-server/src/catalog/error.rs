//! Catalog errors and their mapping to API errors

use shared::error::{AppError, ErrorCode};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Catalog {path:?} is not a valid product list: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write catalog {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Product not found: {0}")]
    NotFound(u64),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Read { .. } | CatalogError::Malformed { .. } => {
                tracing::error!(error = %err, "Failed to load catalog");
                AppError::storage("服务器错误：无法读取商品列表")
            }
            CatalogError::Write { .. } => {
                tracing::error!(error = %err, "Failed to save catalog");
                AppError::storage("服务器错误：无法保存商品列表")
            }
            CatalogError::Validation(msg) => AppError::validation(msg),
            CatalogError::NotFound(id) => {
                AppError::with_message(ErrorCode::ProductNotFound, format!("未找到商品ID：{}", id))
            }
        }
    }
}
