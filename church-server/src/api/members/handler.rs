//! Member portal handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::client::ProfileUpdateRequest;
use shared::models::{AccountPublic, AccountSummary};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::account;
use crate::utils::{AppError, AppResult};

/// GET /api/members/me - the authenticated account's own profile
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<AccountPublic>> {
    let acct = account::find_public_by_id(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Member not found"))?;
    Ok(Json(acct))
}

/// PUT /api/members/{id} - update an account's profile
///
/// Owner-or-Admin only; the check runs before any write so a forbidden
/// request leaves the row untouched. Fields are written as given
/// (full replace): blank input erases the stored value.
pub async fn update_profile(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<ProfileUpdateRequest>,
) -> AppResult<Json<AccountPublic>> {
    if user.id != id && !user.is_admin() {
        tracing::warn!(
            account_id = user.id,
            target_id = id,
            "Profile update denied - not owner"
        );
        return Err(AppError::forbidden("Forbidden"));
    }

    let updated = account::update_profile(&state.pool, id, req.name, req.phone, req.address)
        .await?
        .ok_or_else(|| AppError::not_found("Member not found"))?;

    tracing::info!(account_id = id, "Profile updated");
    Ok(Json(updated))
}

/// GET /api/members - Admin-only listing, newest joiners first
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<AccountSummary>>> {
    if !user.is_admin() {
        return Err(AppError::forbidden("Admin access required"));
    }
    let members = account::list_summaries(&state.pool).await?;
    Ok(Json(members))
}
