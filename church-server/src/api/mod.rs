//! API route modules
//!
//! One module per resource, each exposing a `router()`:
//!
//! - [`auth`] - account registration and login
//! - [`members`] - authenticated portal (me / profile update / admin listing)
//! - [`intake`] - anonymous chatbot member intake
//! - [`events`] - upcoming events listing
//! - [`health`] - health check

pub mod auth;
pub mod events;
pub mod health;
pub mod intake;
pub mod members;

use axum::Router;

use crate::core::ServerState;

/// Build the complete API router (without state)
pub fn router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(auth::router())
        .merge(members::router())
        .merge(intake::router())
        .merge(events::router())
        .merge(health::router())
}
