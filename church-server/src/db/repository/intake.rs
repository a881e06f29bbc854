//! Member Intake Repository
//!
//! Chatbot intake records, keyed for deduplication by the
//! (country_code, phone_number) pair.

use super::{RepoError, RepoResult};
use shared::models::MemberRecord;
use sqlx::SqlitePool;

const RECORD_SELECT: &str =
    "SELECT id, full_name, country_code, phone_number, email, birth_month, birth_day, \
     parish_name, city, state, created_at, updated_at FROM member_record";

/// Validated insert payload (presence and birth-range checks already done).
#[derive(Debug, Clone)]
pub struct NewMemberRecord {
    pub full_name: String,
    pub country_code: String,
    pub phone_number: String,
    pub email: String,
    pub birth_month: Option<i64>,
    pub birth_day: Option<i64>,
    pub parish_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MemberRecord>> {
    let sql = format!("{RECORD_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, MemberRecord>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_phone(
    pool: &SqlitePool,
    country_code: &str,
    phone_number: &str,
) -> RepoResult<Option<MemberRecord>> {
    let sql = format!("{RECORD_SELECT} WHERE country_code = ? AND phone_number = ?");
    let row = sqlx::query_as::<_, MemberRecord>(&sql)
        .bind(country_code)
        .bind(phone_number)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Id of a record other than `exclude_id` holding the phone pair, if any.
/// Used by the update flow so a record may keep its own number.
pub async fn find_other_by_phone(
    pool: &SqlitePool,
    country_code: &str,
    phone_number: &str,
    exclude_id: i64,
) -> RepoResult<Option<i64>> {
    let row: Option<(i64,)> = sqlx::query_as(
        "SELECT id FROM member_record WHERE country_code = ? AND phone_number = ? AND id != ?",
    )
    .bind(country_code)
    .bind(phone_number)
    .bind(exclude_id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|(id,)| id))
}

/// Insert a new intake record. A unique-index violation (duplicate phone
/// pair that raced past the handler's pre-check) comes back as
/// `RepoError::Duplicate`.
pub async fn create(pool: &SqlitePool, data: NewMemberRecord) -> RepoResult<MemberRecord> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO member_record (id, full_name, country_code, phone_number, email, \
         birth_month, birth_day, parish_name, city, state, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?11)",
    )
    .bind(id)
    .bind(&data.full_name)
    .bind(&data.country_code)
    .bind(&data.phone_number)
    .bind(&data.email)
    .bind(data.birth_month)
    .bind(data.birth_day)
    .bind(&data.parish_name)
    .bind(&data.city)
    .bind(&data.state)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create member record".into()))
}

/// Full-replace update of every intake field plus updated_at. Returns the
/// updated record, or None when no row matches the id.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: NewMemberRecord,
) -> RepoResult<Option<MemberRecord>> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE member_record SET full_name = ?1, country_code = ?2, phone_number = ?3, \
         email = ?4, birth_month = ?5, birth_day = ?6, parish_name = ?7, city = ?8, \
         state = ?9, updated_at = ?10 WHERE id = ?11",
    )
    .bind(&data.full_name)
    .bind(&data.country_code)
    .bind(&data.phone_number)
    .bind(&data.email)
    .bind(data.birth_month)
    .bind(data.birth_day)
    .bind(&data.parish_name)
    .bind(&data.city)
    .bind(&data.state)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Ok(None);
    }
    find_by_id(pool, id).await
}
