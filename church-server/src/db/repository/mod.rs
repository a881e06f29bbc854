//! Repository Module
//!
//! CRUD operations over the SQLite tables. Repositories are free functions
//! taking `&SqlitePool`; row types live in `shared::models`.

pub mod account;
pub mod intake;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        // The unique indexes are the source of truth for the dedup keys.
        // A check-then-insert race loses here, and callers translate
        // Duplicate back into the same conflict response the pre-check
        // would have produced.
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
