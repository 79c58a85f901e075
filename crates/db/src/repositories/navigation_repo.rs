//! Repository for the `navigation_items` table.

use sqlx::PgPool;
use tuneshop_core::navigation::OrderAssignment;
use tuneshop_core::types::DbId;

use super::ordering::{reorder_rows, OrderedTable, ReorderError};
use crate::models::navigation::{CreateNavigationItem, NavigationItem, UpdateNavigationItem};

/// Column list for `navigation_items` queries.
const COLUMNS: &str = "\
    id, label, href, icon, sort_order, is_active, translations, \
    created_at, updated_at";

/// Provides data access for header navigation.
pub struct NavigationRepo;

impl NavigationRepo {
    /// Active items in display order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<NavigationItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM navigation_items \
             WHERE is_active = TRUE \
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, NavigationItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// All items, including inactive ones, in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<NavigationItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM navigation_items ORDER BY sort_order, id");
        sqlx::query_as::<_, NavigationItem>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<NavigationItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM navigation_items WHERE id = $1");
        sqlx::query_as::<_, NavigationItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an item. Without an explicit `sort_order` it goes last.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateNavigationItem,
    ) -> Result<NavigationItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO navigation_items (label, href, icon, sort_order, is_active, translations) \
             VALUES ($1, $2, $3, \
                 COALESCE($4, (SELECT COALESCE(MAX(sort_order), 0) + 1 FROM navigation_items)), \
                 COALESCE($5, TRUE), COALESCE($6, '{{}}'::jsonb)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NavigationItem>(&query)
            .bind(dto.label.trim())
            .bind(dto.href.trim())
            .bind(&dto.icon)
            .bind(dto.sort_order)
            .bind(dto.is_active)
            .bind(&dto.translations)
            .fetch_one(pool)
            .await
    }

    /// Partially update an item.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateNavigationItem,
    ) -> Result<Option<NavigationItem>, sqlx::Error> {
        let query = format!(
            "UPDATE navigation_items SET \
                 label = COALESCE($2, label), \
                 href = COALESCE($3, href), \
                 icon = COALESCE($4, icon), \
                 sort_order = COALESCE($5, sort_order), \
                 is_active = COALESCE($6, is_active), \
                 translations = COALESCE($7, translations) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NavigationItem>(&query)
            .bind(id)
            .bind(dto.label.as_deref().map(str::trim))
            .bind(dto.href.as_deref().map(str::trim))
            .bind(&dto.icon)
            .bind(dto.sort_order)
            .bind(dto.is_active)
            .bind(&dto.translations)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM navigation_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a full new order in one transaction.
    pub async fn reorder(pool: &PgPool, ids: &[DbId]) -> Result<Vec<OrderAssignment>, ReorderError> {
        reorder_rows(pool, OrderedTable::NavigationItems, ids).await
    }
}
