//! Transactional `sort_order` rewrite shared by navigation and services.

use sqlx::PgPool;
use tuneshop_core::error::CoreError;
use tuneshop_core::navigation::{plan_reorder, OrderAssignment};
use tuneshop_core::types::DbId;

/// Failure of a reorder: either the request was not a permutation of the
/// stored ids, or the database failed. Nothing is written in either case.
#[derive(Debug, thiserror::Error)]
pub enum ReorderError {
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Tables whose rows can be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderedTable {
    NavigationItems,
    Services,
}

impl OrderedTable {
    fn name(self) -> &'static str {
        match self {
            Self::NavigationItems => "navigation_items",
            Self::Services => "services",
        }
    }
}

/// Rewrite `sort_order` for every row of `table` so that `ids[i]` gets `i + 1`.
///
/// The rows are locked for the duration of the transaction, so a concurrent
/// insert or reorder cannot interleave with the permutation check.
pub async fn reorder_rows(
    pool: &PgPool,
    table: OrderedTable,
    ids: &[DbId],
) -> Result<Vec<OrderAssignment>, ReorderError> {
    let table = table.name();
    let mut tx = pool.begin().await?;

    let lock = format!("SELECT id FROM {table} ORDER BY id FOR UPDATE");
    let existing = sqlx::query_scalar::<_, DbId>(&lock)
        .fetch_all(&mut *tx)
        .await?;

    let plan = plan_reorder(&existing, ids)?;

    let update = format!("UPDATE {table} SET sort_order = $2 WHERE id = $1");
    for assignment in &plan {
        sqlx::query(&update)
            .bind(assignment.id)
            .bind(assignment.sort_order)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    tracing::debug!(table, count = plan.len(), "Rewrote sort_order");
    Ok(plan)
}
