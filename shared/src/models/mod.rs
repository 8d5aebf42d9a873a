//! Data models
//!
//! Shared between site-server and the web frontend (via API).
//! Wire format is camelCase JSON, identical to the persisted documents,
//! so the same types describe both storage and API payloads.

pub mod admin;
pub mod meal;
pub mod settings;

// Re-exports
pub use admin::*;
pub use meal::*;
pub use settings::*;
