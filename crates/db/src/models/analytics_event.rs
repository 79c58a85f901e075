//! Consent-gated analytics events.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tuneshop_core::types::{DbId, Timestamp};

/// A row from the `analytics_events` table. Append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnalyticsEvent {
    pub id: DbId,
    pub event_type: String,
    pub path: String,
    pub language: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub payload: serde_json::Value,
    pub created_at: Timestamp,
}

/// Insert DTO.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnalyticsEvent {
    pub event_type: String,
    pub path: String,
    pub language: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub payload: serde_json::Value,
}
