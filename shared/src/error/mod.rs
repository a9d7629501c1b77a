//! Unified error system for the storefront
//!
//! - [`ErrorCode`]: what went wrong, and which HTTP status it maps to
//! - [`AppError`]: code plus a human-readable message
//! - [`MessageResponse`]: the `{ "message": ... }` body every endpoint speaks
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::validation("订单为空");
//! assert_eq!(err.code, ErrorCode::ValidationFailed);
//! assert_eq!(err.http_status(), shared::http::StatusCode::BAD_REQUEST);
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{AppError, AppResult, MessageResponse};
