//! Repository for the `contact_requests` table.

use sqlx::PgPool;
use tuneshop_core::types::DbId;

use crate::models::contact_request::{
    ContactRequest, ContactRequestFilter, CreateContactRequest,
};

/// Column list for `contact_requests` queries.
const COLUMNS: &str = "\
    id, name, email, phone, message, vehicle, language, is_handled, \
    created_at, updated_at";

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 500;

/// Provides data access for the contact request inbox.
pub struct ContactRequestRepo;

impl ContactRequestRepo {
    pub async fn create(
        pool: &PgPool,
        dto: &CreateContactRequest,
    ) -> Result<ContactRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_requests (name, email, phone, message, vehicle, language) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactRequest>(&query)
            .bind(&dto.name)
            .bind(&dto.email)
            .bind(&dto.phone)
            .bind(&dto.message)
            .bind(&dto.vehicle)
            .bind(&dto.language)
            .fetch_one(pool)
            .await
    }

    /// Newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &ContactRequestFilter,
    ) -> Result<Vec<ContactRequest>, sqlx::Error> {
        let limit = filter.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = filter.offset.unwrap_or(0).max(0);
        let query = format!(
            "SELECT {COLUMNS} FROM contact_requests \
             WHERE ($1::BOOLEAN IS NULL OR is_handled = $1) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ContactRequest>(&query)
            .bind(filter.is_handled)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ContactRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_requests WHERE id = $1");
        sqlx::query_as::<_, ContactRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn set_handled(
        pool: &PgPool,
        id: DbId,
        is_handled: bool,
    ) -> Result<Option<ContactRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_requests SET is_handled = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactRequest>(&query)
            .bind(id)
            .bind(is_handled)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
