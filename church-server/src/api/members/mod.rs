//! Members API - authenticated member portal
//!
//! All routes require a bearer token. Profile updates are restricted to the
//! owning account (or an Admin), and the listing is Admin-only.

pub mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/members/me", get(handler::me))
        .route("/api/members", get(handler::list))
        .route("/api/members/{id}", put(handler::update_profile))
}
