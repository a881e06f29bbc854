//! Utility module - common helpers and types
//!
//! - [`AppError`] / [`AppResult`] - application error type and alias
//! - [`logger`] - tracing setup
//! - [`validation`] - required-field helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, ErrorBody};
pub use result::AppResult;
