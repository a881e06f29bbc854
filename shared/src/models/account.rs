//! Account Model
//!
//! Portal login identity. Independent of the chatbot intake records
//! (`member_record`): an account may exist without an intake record and
//! vice versa.

use serde::{Deserialize, Serialize};

/// Role string stored on the account row. Plain strings, not an enum type,
/// matching the `role` TEXT column; `"Admin"` unlocks the member listing.
pub const ROLE_MEMBER: &str = "Member";
pub const ROLE_ADMIN: &str = "Admin";

/// Full account row, including the password hash. Never leaves the server:
/// the hash is skipped on serialization and API handlers respond with
/// [`AccountPublic`] / [`AccountSummary`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub joined_date: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Public account fields returned to the owner (register/login/me/profile
/// update responses).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AccountPublic {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: String,
    pub joined_date: String,
}

/// Summary fields for the admin member listing (no address).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AccountSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub joined_date: String,
}

impl Account {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

impl From<Account> for AccountPublic {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            name: a.name,
            email: a.email,
            phone: a.phone,
            address: a.address,
            role: a.role,
            joined_date: a.joined_date,
        }
    }
}
