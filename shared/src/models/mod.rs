//! Data models
//!
//! Shared between church-server and its API consumers.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY, snowflake-generated).

pub mod account;
pub mod event;
pub mod member_record;

// Re-exports
pub use account::*;
pub use event::*;
pub use member_record::*;
