//! First-run admin account.
//!
//! When `admin_users` is empty and both `ADMIN_USERNAME` and `ADMIN_PASSWORD`
//! are set, an `admin` account is created with those credentials. Nothing
//! happens once any admin user exists.

use tuneshop_core::roles::ROLE_ADMIN;
use tuneshop_db::models::admin_user::CreateAdminUser;
use tuneshop_db::repositories::AdminUserRepo;
use tuneshop_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};

/// Credentials for the initial admin account.
#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    pub username: String,
    pub password: String,
}

impl BootstrapAdmin {
    /// Read `ADMIN_USERNAME` / `ADMIN_PASSWORD`. `None` unless both are set.
    pub fn from_env() -> Option<Self> {
        let username = std::env::var("ADMIN_USERNAME").ok()?.trim().to_string();
        let password = std::env::var("ADMIN_PASSWORD").ok()?;
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self { username, password })
    }
}

/// Create the initial admin if the table is empty. Returns `true` if created.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<bool> {
    if AdminUserRepo::count(pool).await? > 0 {
        return Ok(false);
    }

    validate_password_strength(&admin.password, MIN_PASSWORD_LENGTH).map_err(AppError::BadRequest)?;
    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            username: admin.username.clone(),
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrapped initial admin user");
    Ok(true)
}
