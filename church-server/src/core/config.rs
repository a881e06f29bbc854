use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | DATABASE_PATH | church.db | SQLite database file |
/// | HTTP_PORT | 4000 | HTTP API port |
/// | CORS_ORIGIN | http://localhost:3000 | permitted cross-origin caller |
/// | JWT_SECRET | generated (dev only) | token-signing secret |
/// | JWT_EXPIRATION_MINUTES | 10080 | token lifetime (7 days) |
/// | ENVIRONMENT | development | development | staging | production |
///
/// `LOG_LEVEL` and `LOG_DIR` are read by
/// [`setup_environment`](crate::setup_environment), which runs before any
/// `Config` exists.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file path
    pub database_path: String,
    /// HTTP API port
    pub http_port: u16,
    /// Permitted cross-origin caller (the portal frontend)
    pub cors_origin: String,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "church.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
