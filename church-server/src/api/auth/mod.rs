//! Auth API - account registration and login

pub mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/register", post(handler::register))
        .route("/api/auth/login", post(handler::login))
}
