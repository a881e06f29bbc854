//! Church Membership API Server
//!
//! Backend for the parish member portal and the registration chatbot:
//!
//! - **Auth** (`api::auth`, `auth`): JWT + Argon2 account registration/login
//! - **Member portal** (`api::members`): profile and admin listing
//! - **Intake** (`api::intake`): chatbot member registration, deduplicated
//!   by phone number
//! - **Events** (`api::events`): upcoming events listing
//! - **Database** (`db`): embedded SQLite storage via sqlx
//!
//! # Module structure
//!
//! ```text
//! church-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── auth/          # JWT, password hashing, request extractor
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # pool setup and repositories
//! └── utils/         # errors, validation, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured auth events under the "security" target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Prepare the process environment: load `.env`, then initialize logging
/// from `LOG_LEVEL` / `LOG_DIR`.
pub fn setup_environment() {
    let _ = dotenv::dotenv();

    let level = std::env::var("LOG_LEVEL").ok();
    let dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(level.as_deref(), dir.as_deref());
}
