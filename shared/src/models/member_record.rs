//! Member Record Model
//!
//! Church intake record collected by the registration chatbot. Identity key
//! for deduplication is the (country_code, phone_number) pair, enforced by a
//! unique index. Wire format is camelCase, as the chatbot frontend sends it.

use serde::{Deserialize, Serialize};

/// Member intake record row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MemberRecord {
    pub id: i64,
    pub full_name: String,
    pub country_code: String,
    pub phone_number: String,
    pub email: String,
    pub birth_month: Option<i64>,
    pub birth_day: Option<i64>,
    pub parish_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Intake submission payload (registration and update share the shape).
///
/// Every field is optional at the deserialization layer so that missing and
/// empty values produce the flow's own 400 responses rather than a serde
/// rejection; handlers validate presence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeSubmission {
    pub full_name: Option<String>,
    pub country_code: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub birth_month: Option<i64>,
    pub birth_day: Option<i64>,
    pub parish_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}
