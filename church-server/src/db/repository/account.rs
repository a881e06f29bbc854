//! Account Repository

use super::RepoResult;
use shared::models::{Account, AccountPublic, AccountSummary, ROLE_MEMBER};
use sqlx::SqlitePool;

const PUBLIC_SELECT: &str =
    "SELECT id, name, email, phone, address, role, joined_date FROM account";

/// Insert payload; the handler has already hashed the password.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub password_hash: String,
}

/// Friendly pre-check for the register flow. The unique index on email is
/// the actual guarantee; an insert racing past this check surfaces as
/// `RepoError::Duplicate` from [`create`].
pub async fn email_exists(pool: &SqlitePool, email: &str) -> RepoResult<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM account WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

pub async fn create(pool: &SqlitePool, data: NewAccount) -> RepoResult<AccountPublic> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    let joined = shared::util::today_iso();
    sqlx::query(
        "INSERT INTO account (id, name, email, phone, address, password_hash, role, joined_date, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.address)
    .bind(&data.password_hash)
    .bind(ROLE_MEMBER)
    .bind(&joined)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(AccountPublic {
        id,
        name: data.name,
        email: data.email,
        phone: data.phone,
        address: data.address,
        role: ROLE_MEMBER.to_string(),
        joined_date: joined,
    })
}

/// Full row including the password hash, for credential verification only.
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<Account>> {
    let row = sqlx::query_as::<_, Account>(
        "SELECT id, name, email, phone, address, password_hash, role, joined_date, created_at, updated_at \
         FROM account WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn find_public_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<AccountPublic>> {
    let sql = format!("{PUBLIC_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, AccountPublic>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Full-replace profile update: name/phone/address are written as given
/// (blank input erases stored values) and updated_at bumped. Returns None
/// when no row matches the id.
pub async fn update_profile(
    pool: &SqlitePool,
    id: i64,
    name: Option<String>,
    phone: Option<String>,
    address: Option<String>,
) -> RepoResult<Option<AccountPublic>> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE account SET name = ?1, phone = ?2, address = ?3, updated_at = ?4 WHERE id = ?5",
    )
    .bind(&name)
    .bind(&phone)
    .bind(&address)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Ok(None);
    }
    find_public_by_id(pool, id).await
}

/// Summary fields (no address) for the admin listing, newest joiners first.
/// Id is the tiebreak within a joining day so the order is stable.
pub async fn list_summaries(pool: &SqlitePool) -> RepoResult<Vec<AccountSummary>> {
    let rows = sqlx::query_as::<_, AccountSummary>(
        "SELECT id, name, email, phone, role, joined_date FROM account \
         ORDER BY joined_date DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
