//! Admin panel user model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tuneshop_core::types::{DbId, Timestamp};

/// Full row from the `admin_users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`AdminUserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub failed_login_count: i32,
    pub locked_until: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe admin user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct AdminUserResponse {
    pub id: DbId,
    pub username: String,
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
}

impl From<&AdminUser> for AdminUserResponse {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            is_active: user.is_active,
            last_login_at: user.last_login_at,
        }
    }
}

/// DTO for creating an admin user. The password is already hashed.
#[derive(Debug, Deserialize)]
pub struct CreateAdminUser {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}
