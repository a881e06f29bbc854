//! Auth handlers
//!
//! Registration and login for the member portal. Both answer with a signed
//! bearer token plus the account's public fields, so the frontend can log
//! the user in immediately after registering.

use axum::{Json, extract::State, http::StatusCode};
use shared::client::{AuthResponse, LoginRequest, RegisterRequest};

use crate::auth::password;
use crate::core::ServerState;
use crate::db::repository::{RepoError, account};
use crate::db::repository::account::NewAccount;
use crate::utils::{AppError, AppResult};
use crate::utils::validation::required;

/// POST /api/auth/register
///
/// Creates an account with the Member role and answers 201 with a token.
/// A taken email is a 409; the unique index on email backstops the
/// pre-check under concurrency.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let (Some(name), Some(email), Some(pw)) = (
        required(&req.name),
        required(&req.email),
        required(&req.password),
    ) else {
        return Err(AppError::validation("Name, email, and password are required"));
    };

    if account::email_exists(&state.pool, &email).await? {
        return Err(AppError::conflict("An account with this email already exists"));
    }

    let password_hash = password::hash_password(&pw)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let data = NewAccount {
        name,
        email,
        // Blank optional fields are stored as NULL, not empty strings
        phone: required(&req.phone),
        address: required(&req.address),
        password_hash,
    };

    let created = match account::create(&state.pool, data).await {
        Ok(acc) => acc,
        // Concurrent registration with the same email won the race
        Err(RepoError::Duplicate(_)) => {
            return Err(AppError::conflict("An account with this email already exists"));
        }
        Err(e) => return Err(e.into()),
    };

    let token = state
        .jwt_service
        .generate_token(created.id, &created.email, &created.role)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(account_id = created.id, email = %created.email, "Account registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            account: created,
        }),
    ))
}

/// POST /api/auth/login
///
/// Unknown email and wrong password answer with the same 401 message, so
/// the response never reveals whether an email is registered.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let (Some(email), Some(pw)) = (required(&req.email), required(&req.password)) else {
        return Err(AppError::validation("Email and password are required"));
    };

    let Some(acct) = account::find_by_email(&state.pool, &email).await? else {
        tracing::warn!(email = %email, "Login failed - unknown email");
        return Err(AppError::invalid_credentials());
    };

    let verified = password::verify_password(&pw, &acct.password_hash)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !verified {
        tracing::warn!(email = %email, "Login failed - wrong password");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(acct.id, &acct.email, &acct.role)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(account_id = acct.id, email = %acct.email, "Login succeeded");

    Ok(Json(AuthResponse {
        token,
        account: acct.into(),
    }))
}
