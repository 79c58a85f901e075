//! Repository for the `admin_users` table.

use sqlx::PgPool;
use tuneshop_core::types::{DbId, Timestamp};

use crate::models::admin_user::{AdminUser, CreateAdminUser};

/// Column list for `admin_users` queries.
const COLUMNS: &str = "\
    id, username, password_hash, role, is_active, last_login_at, \
    failed_login_count, locked_until, created_at, updated_at";

/// Provides data access for admin panel accounts.
pub struct AdminUserRepo;

impl AdminUserRepo {
    pub async fn create(pool: &PgPool, input: &CreateAdminUser) -> Result<AdminUser, sqlx::Error> {
        let query = format!(
            "INSERT INTO admin_users (username, password_hash, role) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_users WHERE id = $1");
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<AdminUser>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admin_users WHERE username = $1");
        sqlx::query_as::<_, AdminUser>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admin_users")
            .fetch_one(pool)
            .await
    }

    /// Increment `failed_login_count` by 1.
    pub async fn increment_failed_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE admin_users SET failed_login_count = failed_login_count + 1 WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Lock an account until the specified timestamp.
    pub async fn lock_account(pool: &PgPool, id: DbId, until: Timestamp) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE admin_users SET locked_until = $2 WHERE id = $1")
            .bind(id)
            .bind(until)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Clear an expired lock together with the failures that caused it.
    pub async fn clear_expired_lock(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE admin_users SET failed_login_count = 0, locked_until = NULL
             WHERE id = $1 AND locked_until <= NOW()",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Reset the failure counter, clear any lock, and stamp `last_login_at`.
    pub async fn record_successful_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE admin_users SET
                failed_login_count = 0,
                locked_until = NULL,
                last_login_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }
}
