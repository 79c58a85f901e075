//! Repository for the `services` table.

use sqlx::PgPool;
use tuneshop_core::navigation::OrderAssignment;
use tuneshop_core::types::DbId;

use super::ordering::{reorder_rows, OrderedTable, ReorderError};
use crate::models::service::{CreateService, Service, UpdateService};

/// Column list for `services` queries.
const COLUMNS: &str = "\
    id, title, description, price, features, icon, category, sort_order, \
    is_active, translations, created_at, updated_at";

/// Provides data access for service cards.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Active services in display order, optionally limited to one category.
    pub async fn list_active(
        pool: &PgPool,
        category: Option<&str>,
    ) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services \
             WHERE is_active = TRUE AND ($1::TEXT IS NULL OR category = $1) \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services ORDER BY sort_order, id");
        sqlx::query_as::<_, Service>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a service. Without an explicit `sort_order` it goes last.
    pub async fn create(pool: &PgPool, dto: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services \
                 (title, description, price, features, icon, category, sort_order, \
                  is_active, translations) \
             VALUES ($1, $2, $3, $4, $5, $6, \
                 COALESCE($7, (SELECT COALESCE(MAX(sort_order), 0) + 1 FROM services)), \
                 COALESCE($8, TRUE), COALESCE($9, '{{}}'::jsonb)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(dto.title.trim())
            .bind(&dto.description)
            .bind(&dto.price)
            .bind(&dto.features)
            .bind(&dto.icon)
            .bind(&dto.category)
            .bind(dto.sort_order)
            .bind(dto.is_active)
            .bind(&dto.translations)
            .fetch_one(pool)
            .await
    }

    /// Partially update a service.
    ///
    /// Uses `COALESCE` so only provided fields are changed. A provided
    /// `features` list replaces the stored one as a whole.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 price = COALESCE($4, price), \
                 features = COALESCE($5, features), \
                 icon = COALESCE($6, icon), \
                 category = COALESCE($7, category), \
                 sort_order = COALESCE($8, sort_order), \
                 is_active = COALESCE($9, is_active), \
                 translations = COALESCE($10, translations) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(dto.title.as_deref().map(str::trim))
            .bind(&dto.description)
            .bind(&dto.price)
            .bind(&dto.features)
            .bind(&dto.icon)
            .bind(&dto.category)
            .bind(dto.sort_order)
            .bind(dto.is_active)
            .bind(&dto.translations)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a full new order in one transaction.
    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<Vec<OrderAssignment>, ReorderError> {
        reorder_rows(pool, OrderedTable::Services, ids).await
    }
}
