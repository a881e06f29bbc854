use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Server state - shared handles for every request handler
///
/// Holds the configuration, the SQLite connection pool and the JWT service.
/// Cloning is shallow (Arc / pool handles), so axum can clone it per request
/// at negligible cost. The pool is owned here and passed explicitly to
/// repositories; there is no ambient global database handle.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Assemble a state from already-constructed parts (used by tests)
    pub fn new(config: Config, pool: SqlitePool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            pool,
            jwt_service,
        }
    }

    /// Initialize the server state: open the database (running migrations)
    /// and build the JWT service from config.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new(&config.database_path).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config.clone(), db_service.pool, jwt_service))
    }

    /// JWT service handle
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
