//! JWT token service
//!
//! Generates, validates and decodes the bearer tokens issued by the auth
//! portal. Subject is the account id; email and role ride along as claims.
//! Expiry is the only invalidation - there is no refresh and no revocation
//! list.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seven days, the fixed portal token lifetime.
const DEFAULT_EXPIRATION_MINUTES: i64 = 7 * 24 * 60;

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HS256 secret (at least 32 bytes)
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
    /// Token issuer
    pub issuer: String,
    /// Token audience
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        let secret = match load_jwt_secret() {
            Ok(secret) => secret,
            Err(e) => {
                #[cfg(debug_assertions)]
                {
                    tracing::warn!("JWT configuration error: {}, using generated dev key", e);
                    generate_printable_jwt_secret()
                }
                #[cfg(not(debug_assertions))]
                {
                    panic!("FATAL: JWT_SECRET configuration failed: {}", e);
                }
            }
        };

        Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_EXPIRATION_MINUTES),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "church-server".to_string()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "church-portal".to_string()),
        }
    }
}

/// JWT claims stored in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account ID (subject)
    pub sub: String,
    /// Account email
    pub email: String,
    /// Role ("Member" | "Admin")
    pub role: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Generate a printable random JWT secret (development fallback).
pub fn generate_printable_jwt_secret() -> String {
    let allowed_chars =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+[]{}|;:,.<>?";

    let rng = SystemRandom::new();
    let mut key = String::new();

    for _ in 0..64 {
        let mut byte = [0u8; 1];
        if rng.fill(&mut byte).is_err() {
            // Random generation failed; fall back to a fixed dev-only key
            return "ChurchServerDevelopmentSecureKey2026!".to_string();
        }
        let idx = (byte[0] as usize) % allowed_chars.len();
        key.push(
            allowed_chars
                .as_bytes()
                .get(idx)
                .copied()
                .map(char::from)
                .unwrap_or('x'),
        );
    }

    key
}

/// Load the JWT secret from the environment.
fn load_jwt_secret() -> Result<String, JwtError> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) => {
            if secret.len() < 32 {
                return Err(JwtError::ConfigError(
                    "JWT_SECRET must be at least 32 characters long".to_string(),
                ));
            }
            Ok(secret)
        }
        Err(_) => {
            #[cfg(debug_assertions)]
            {
                tracing::warn!("JWT_SECRET not set! Generating temporary key for development.");
                Ok(generate_printable_jwt_secret())
            }
            #[cfg(not(debug_assertions))]
            {
                Err(JwtError::ConfigError(
                    "JWT_SECRET environment variable must be set in production!".to_string(),
                ))
            }
        }
    }
}

/// JWT token service
#[derive(Debug, Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create a new JWT service with default configuration
    pub fn new() -> Self {
        Self::with_config(JwtConfig::default())
    }

    /// Create a new JWT service with the given configuration
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generate a token for an account
    pub fn generate_token(
        &self,
        account_id: i64,
        email: &str,
        role: &str,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: account_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

/// Current caller context, parsed from validated JWT claims.
///
/// Created by the [`CurrentUser`] axum extractor and available to any
/// protected handler that lists it as an argument.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Account ID
    pub id: i64,
    /// Account email
    pub email: String,
    /// Role ("Member" | "Admin")
    pub role: String,
}

impl TryFrom<Claims> for CurrentUser {
    type Error = JwtError;

    fn try_from(claims: Claims) -> Result<Self, JwtError> {
        let id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| JwtError::InvalidToken(format!("Non-numeric subject: {}", claims.sub)))?;
        Ok(Self {
            id,
            email: claims.email,
            role: claims.role,
        })
    }
}

impl CurrentUser {
    /// Admin role unlocks the member listing and cross-account profile edits
    pub fn is_admin(&self) -> bool {
        self.role == shared::models::ROLE_ADMIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "test-secret-key-that-is-long-enough!".to_string(),
            expiration_minutes: 60,
            issuer: "church-server".to_string(),
            audience: "church-portal".to_string(),
        })
    }

    #[test]
    fn test_jwt_generation_and_validation() {
        let service = test_service();

        let token = service
            .generate_token(42, "jane@example.com", "Member")
            .expect("Failed to generate test token");

        let claims = service
            .validate_token(&token)
            .expect("Failed to validate test token");

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email, "jane@example.com");
        assert_eq!(claims.role, "Member");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = JwtService::with_config(JwtConfig {
            secret: "test-secret-key-that-is-long-enough!".to_string(),
            expiration_minutes: -5,
            issuer: "church-server".to_string(),
            audience: "church-portal".to_string(),
        });

        let token = service
            .generate_token(1, "a@b.com", "Member")
            .expect("Failed to generate test token");

        match service.validate_token(&token) {
            Err(JwtError::ExpiredToken) => {}
            other => panic!("Expected ExpiredToken, got {:?}", other.map(|c| c.sub)),
        }
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = test_service();
        let other = JwtService::with_config(JwtConfig {
            secret: "a-completely-different-secret-key!!!".to_string(),
            expiration_minutes: 60,
            issuer: "church-server".to_string(),
            audience: "church-portal".to_string(),
        });

        let token = service
            .generate_token(1, "a@b.com", "Member")
            .expect("Failed to generate test token");

        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_current_user_from_claims() {
        let service = test_service();
        let token = service
            .generate_token(7, "admin@example.com", "Admin")
            .expect("Failed to generate test token");
        let claims = service.validate_token(&token).expect("valid token");

        let user = CurrentUser::try_from(claims).expect("numeric subject");
        assert_eq!(user.id, 7);
        assert!(user.is_admin());
    }

    #[test]
    fn test_printable_secret_length() {
        let key = generate_printable_jwt_secret();
        assert!(key.len() >= 32);
    }
}
