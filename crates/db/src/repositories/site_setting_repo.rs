//! Repository for the `site_settings` table.

use sqlx::PgPool;

use crate::models::site_setting::SiteSetting;

/// Provides data access for key/value site settings.
pub struct SiteSettingRepo;

impl SiteSettingRepo {
    pub async fn get(pool: &PgPool, key: &str) -> Result<Option<SiteSetting>, sqlx::Error> {
        sqlx::query_as::<_, SiteSetting>(
            "SELECT key, value, updated_at FROM site_settings WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(pool)
        .await
    }

    /// Insert or replace a setting value.
    pub async fn upsert(
        pool: &PgPool,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<SiteSetting, sqlx::Error> {
        sqlx::query_as::<_, SiteSetting>(
            "INSERT INTO site_settings (key, value) VALUES ($1, $2) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value \
             RETURNING key, value, updated_at",
        )
        .bind(key)
        .bind(value)
        .fetch_one(pool)
        .await
    }
}
