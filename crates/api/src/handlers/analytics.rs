//! Consent-gated analytics sink.
//!
//! The public endpoint always answers 202 so the site cannot tell whether an
//! event was kept. Events are stored only when the visitor's consent allows
//! analytics; without consent nothing is read, looked up, or written.

use std::time::Duration;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tuneshop_core::consent::ConsentCategory;
use tuneshop_db::models::analytics_event::CreateAnalyticsEvent;
use tuneshop_db::repositories::AnalyticsEventRepo;

use crate::error::AppResult;
use crate::geo;
use crate::middleware::context::Client;
use crate::middleware::rbac::RequireAdmin;
use crate::query::SummaryParams;
use crate::response::DataResponse;
use crate::state::AppState;

const MAX_EVENT_TYPE_LEN: usize = 64;
const MAX_PATH_LEN: usize = 2048;

/// Event as posted by the site.
#[derive(Debug, Deserialize)]
pub struct AnalyticsEventInput {
    pub event_type: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub payload: Value,
}

/// One row of the admin summary.
#[derive(Debug, Serialize)]
pub struct EventCount {
    pub event_type: String,
    pub count: i64,
}

/// POST /api/v1/analytics/events
///
/// Bodies that do not parse are dropped like any other malformed event.
pub async fn record_event(
    State(state): State<AppState>,
    Client(ctx): Client,
    headers: HeaderMap,
    body: Result<Json<AnalyticsEventInput>, JsonRejection>,
) -> StatusCode {
    if !ctx.allows(ConsentCategory::Analytics) {
        return StatusCode::ACCEPTED;
    }

    let input = match body {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Dropping unparseable analytics event");
            return StatusCode::ACCEPTED;
        }
    };

    let event_type = input.event_type.trim();
    if event_type.is_empty()
        || event_type.len() > MAX_EVENT_TYPE_LEN
        || input.path.len() > MAX_PATH_LEN
    {
        tracing::debug!(event_type, "Dropping malformed analytics event");
        return StatusCode::ACCEPTED;
    }

    let location = match (state.config.geolocation_url.as_deref(), geo::client_ip(&headers)) {
        (Some(url), Some(ip)) => {
            let timeout = Duration::from_millis(state.config.geolocation_timeout_ms);
            geo::locate(&state.http, url, &ip, timeout).await
        }
        _ => None,
    }
    .unwrap_or_default();

    let payload = if input.payload.is_null() {
        Value::Object(Default::default())
    } else {
        input.payload
    };

    let event = CreateAnalyticsEvent {
        event_type: event_type.to_string(),
        path: input.path,
        language: ctx.language.as_str().to_string(),
        country: location.country,
        city: location.city,
        payload,
    };
    if let Err(e) = AnalyticsEventRepo::create(&state.pool, &event).await {
        tracing::warn!(error = %e, event_type = %event.event_type, "Failed to store analytics event");
    }

    StatusCode::ACCEPTED
}

/// GET /api/v1/admin/analytics/summary
///
/// Event counts per type over the last `days` days (default 30, max 365).
pub async fn summary(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<SummaryParams>,
) -> AppResult<impl IntoResponse> {
    let days = params.days.unwrap_or(30).clamp(1, 365);
    let since = Utc::now() - chrono::Duration::days(days);

    let data: Vec<EventCount> = AnalyticsEventRepo::count_by_type(&state.pool, since)
        .await?
        .into_iter()
        .map(|(event_type, count)| EventCount { event_type, count })
        .collect();

    Ok(Json(DataResponse { data }))
}
