//! Shared types for the storefront
//!
//! Wire models, the boundary error type and small request helpers used by
//! the server and by anything that talks to its HTTP API.

pub mod error;
pub mod extract;
pub mod models;
pub mod types;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode, MessageResponse};
pub use extract::AppJson;
pub use types::NumberLike;
