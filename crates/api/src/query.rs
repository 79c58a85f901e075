//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Optional `?category=` filter for the public services list.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}

/// Optional `?language=` filter for admin dictionary listing.
#[derive(Debug, Default, Deserialize)]
pub struct LanguageFilterParams {
    pub language: Option<String>,
}

/// Look-back window for the analytics summary (`?days=`, default 30).
#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
    pub days: Option<i64>,
}
