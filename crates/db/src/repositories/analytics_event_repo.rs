//! Repository for the `analytics_events` table.
//!
//! Callers must check cookie consent before inserting; the repository
//! itself does not know about consent.

use sqlx::PgPool;

use crate::models::analytics_event::{AnalyticsEvent, CreateAnalyticsEvent};

/// Column list for `analytics_events` queries.
const COLUMNS: &str = "id, event_type, path, language, country, city, payload, created_at";

/// Provides data access for analytics events.
pub struct AnalyticsEventRepo;

impl AnalyticsEventRepo {
    pub async fn create(
        pool: &PgPool,
        dto: &CreateAnalyticsEvent,
    ) -> Result<AnalyticsEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO analytics_events (event_type, path, language, country, city, payload) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AnalyticsEvent>(&query)
            .bind(&dto.event_type)
            .bind(&dto.path)
            .bind(&dto.language)
            .bind(&dto.country)
            .bind(&dto.city)
            .bind(&dto.payload)
            .fetch_one(pool)
            .await
    }

    /// Event counts per type since a point in time.
    pub async fn count_by_type(
        pool: &PgPool,
        since: tuneshop_core::types::Timestamp,
    ) -> Result<Vec<(String, i64)>, sqlx::Error> {
        sqlx::query_as::<_, (String, i64)>(
            "SELECT event_type, COUNT(*) FROM analytics_events \
             WHERE created_at >= $1 \
             GROUP BY event_type \
             ORDER BY event_type",
        )
        .bind(since)
        .fetch_all(pool)
        .await
    }
}
