//! Authentication module
//!
//! JWT bearer-token auth and password hashing:
//! - [`JwtService`] - token generation and validation
//! - [`CurrentUser`] - caller context, extracted per-request
//! - [`password`] - argon2 hash/verify

pub mod extractor;
pub mod jwt;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
