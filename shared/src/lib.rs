//! Shared types for the VAMCC church membership service
//!
//! Data models and API DTOs used by both church-server and its
//! integration tests. DB row types gate their `sqlx::FromRow` derive
//! behind the `db` feature so serialization-only consumers stay light.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
