//! Intake API - chatbot member registration
//!
//! Anonymous routes used by the registration chatbot. Records are
//! deduplicated by the (countryCode, phoneNumber) pair; a duplicate on
//! registration answers 409 with the existing record's id so the chatbot
//! can offer the update flow instead.

pub mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/members/register", post(handler::register))
        .route("/api/members/by-phone", get(handler::by_phone))
        .route("/api/members/records/{id}", put(handler::update))
}
