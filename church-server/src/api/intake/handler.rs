//! Intake handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use shared::models::{IntakeSubmission, MemberRecord};

use crate::core::ServerState;
use crate::db::repository::{RepoError, intake};
use crate::db::repository::intake::NewMemberRecord;
use crate::utils::{AppError, AppResult};
use crate::utils::validation::required;

const DUPLICATE_PHONE_MSG: &str =
    "Phone number already exists! Would you like to view and update your record?";

/// Envelope for successful intake writes.
#[derive(Debug, Serialize)]
pub struct IntakeResponse {
    pub success: bool,
    pub member: MemberRecord,
}

/// Lookup query for GET /api/members/by-phone
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneQuery {
    pub country_code: Option<String>,
    pub phone_number: Option<String>,
}

/// Birth month/day check for registration: both must be present and in
/// range ([1,12] / [1,31]). Month and day are validated independently,
/// so combinations like Feb 31 are accepted.
fn birth_in_range(month: Option<i64>, day: Option<i64>) -> bool {
    month.is_some_and(|m| (1..=12).contains(&m)) && day.is_some_and(|d| (1..=31).contains(&d))
}

fn submission_fields(
    req: &IntakeSubmission,
) -> Option<(String, String, String, String)> {
    Some((
        required(&req.full_name)?,
        required(&req.country_code)?,
        required(&req.phone_number)?,
        required(&req.email)?,
    ))
}

fn to_new_record(
    req: IntakeSubmission,
    full_name: String,
    country_code: String,
    phone_number: String,
    email: String,
) -> NewMemberRecord {
    NewMemberRecord {
        full_name,
        country_code,
        phone_number,
        email,
        birth_month: req.birth_month,
        birth_day: req.birth_day,
        // Blank optional fields are stored as NULL
        parish_name: required(&req.parish_name),
        city: required(&req.city),
        state: required(&req.state),
    }
}

/// POST /api/members/register
///
/// Validates presence and birth ranges, then creates the record. A phone
/// pair already on file answers 409 carrying the existing record's id.
/// The unique index backstops the pre-check: an insert losing the race
/// surfaces the same conflict the pre-check would have produced.
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<IntakeSubmission>,
) -> AppResult<(StatusCode, Json<IntakeResponse>)> {
    let Some((full_name, country_code, phone_number, email)) = submission_fields(&req) else {
        return Err(AppError::validation(
            "Full Name, Country Code, Phone Number, and Email are required",
        ));
    };

    // Checked on registration only; the update flow never re-checks, so
    // the columns stay nullable even though registration requires both.
    if !birth_in_range(req.birth_month, req.birth_day) {
        return Err(AppError::validation("Invalid date of birth"));
    }

    if let Some(existing) = intake::find_by_phone(&state.pool, &country_code, &phone_number).await?
    {
        tracing::info!(record_id = existing.id, "Duplicate phone on registration");
        return Err(AppError::duplicate(existing.id, DUPLICATE_PHONE_MSG));
    }

    let data = to_new_record(req, full_name, country_code.clone(), phone_number.clone(), email);
    let record = match intake::create(&state.pool, data).await {
        Ok(r) => r,
        Err(RepoError::Duplicate(_)) => {
            // Lost the check-then-insert race; fetch the winner's id for the
            // same decision-point response.
            return match intake::find_by_phone(&state.pool, &country_code, &phone_number).await? {
                Some(existing) => Err(AppError::duplicate(existing.id, DUPLICATE_PHONE_MSG)),
                None => Err(AppError::conflict("This phone number is already registered")),
            };
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(record_id = record.id, "Member record created");
    Ok((
        StatusCode::CREATED,
        Json(IntakeResponse {
            success: true,
            member: record,
        }),
    ))
}

/// GET /api/members/by-phone?countryCode=..&phoneNumber=..
pub async fn by_phone(
    State(state): State<ServerState>,
    Query(query): Query<PhoneQuery>,
) -> AppResult<Json<MemberRecord>> {
    let (Some(country_code), Some(phone_number)) = (
        required(&query.country_code),
        required(&query.phone_number),
    ) else {
        return Err(AppError::validation("Country Code and Phone Number are required"));
    };

    let record = intake::find_by_phone(&state.pool, &country_code, &phone_number)
        .await?
        .ok_or_else(|| AppError::not_found("Member not found"))?;
    Ok(Json(record))
}

/// PUT /api/members/records/{id}
///
/// Full-replace update of an intake record. The phone pair may stay the
/// same, but taking another record's pair is a 409. Birth ranges are not
/// re-validated here.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(req): Json<IntakeSubmission>,
) -> AppResult<Json<IntakeResponse>> {
    let Some((full_name, country_code, phone_number, email)) = submission_fields(&req) else {
        return Err(AppError::validation(
            "Full Name, Country Code, Phone Number, and Email are required",
        ));
    };

    if intake::find_other_by_phone(&state.pool, &country_code, &phone_number, id)
        .await?
        .is_some()
    {
        return Err(AppError::conflict(
            "This phone number is already registered by another member",
        ));
    }

    let data = to_new_record(req, full_name, country_code, phone_number, email);
    let record = match intake::update(&state.pool, id, data).await {
        Ok(Some(r)) => r,
        Ok(None) => return Err(AppError::not_found("Member not found")),
        // Another update claimed the pair between check and write
        Err(RepoError::Duplicate(_)) => {
            return Err(AppError::conflict("This phone number is already registered"));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(record_id = id, "Member record updated");
    Ok(Json(IntakeResponse {
        success: true,
        member: record,
    }))
}
