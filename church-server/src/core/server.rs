//! Server Implementation
//!
//! HTTP server startup and shutdown

use axum::http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::{Config, ServerState};
use crate::utils::AppError;

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (for tests and embedding)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Build the CORS layer for the configured portal origin. A bad origin
    /// value falls back to allowing any caller rather than refusing to start.
    fn cors_layer(config: &Config) -> CorsLayer {
        let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
        match config.cors_origin.parse::<HeaderValue>() {
            Ok(origin) => layer.allow_origin(origin),
            Err(_) => {
                tracing::warn!(
                    origin = %config.cors_origin,
                    "Invalid CORS_ORIGIN, allowing any origin"
                );
                layer.allow_origin(Any)
            }
        }
    }

    pub async fn run(&self) -> Result<(), AppError> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let app = crate::api::router().with_state(state).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Self::cors_layer(&self.config)),
        );

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

        tracing::info!("Church API running on http://localhost:{}", self.config.http_port);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutting down...");
            })
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtConfig;
    use axum::{Router, body::Body, routing::get};
    use http::{Request, header};
    use tower::ServiceExt;

    fn config_with_origin(origin: &str) -> Config {
        Config {
            database_path: "unused.db".to_string(),
            http_port: 0,
            cors_origin: origin.to_string(),
            jwt: JwtConfig {
                secret: "test-secret-key-that-is-long-enough!".to_string(),
                expiration_minutes: 60,
                issuer: "church-server".to_string(),
                audience: "church-portal".to_string(),
            },
            environment: "development".to_string(),
        }
    }

    async fn allow_origin_for(config_origin: &str, request_origin: &str) -> Option<String> {
        let app: Router = Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(Server::cors_layer(&config_with_origin(config_origin)));

        let request = Request::builder()
            .uri("/")
            .header(header::ORIGIN, request_origin)
            .body(Body::empty())
            .expect("build request");
        let response = app.oneshot(request).await.expect("response");
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    #[tokio::test]
    async fn cors_layer_applies_configured_origin() {
        let allowed = allow_origin_for("http://localhost:3000", "http://localhost:3000").await;
        assert_eq!(allowed.as_deref(), Some("http://localhost:3000"));

        // A different caller gets no allow-origin header back
        let denied = allow_origin_for("http://localhost:3000", "http://elsewhere.test").await;
        assert_eq!(denied, None);
    }

    #[tokio::test]
    async fn cors_layer_falls_back_to_any_on_bad_origin() {
        let allowed = allow_origin_for("bad\norigin", "http://elsewhere.test").await;
        assert_eq!(allowed.as_deref(), Some("*"));
    }
}
