//! Client-related types shared between server and clients
//!
//! Request/response DTOs for the auth portal API.

use serde::{Deserialize, Serialize};

use crate::models::AccountPublic;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Account registration request.
///
/// Required fields are optional here so the handler can answer missing or
/// empty input with the flow's own 400 message instead of a serde rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Token + public account fields, returned by register and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub account: AccountPublic,
}

/// Profile update request.
///
/// Full-replace semantics: every field overwrites its column unconditionally,
/// so an absent or empty value erases the stored one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
