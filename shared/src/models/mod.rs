//! Data models
//!
//! Shared between the server and the shop front-end (via API).
//! Field names on the wire are camelCase to match the browser code.

pub mod admin;
pub mod order;
pub mod product;

// Re-exports
pub use admin::*;
pub use order::*;
pub use product::*;
