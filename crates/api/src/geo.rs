//! Optional reverse geolocation for analytics events.
//!
//! Only ever called after the analytics consent gate has passed. Every
//! failure (no IP, timeout, bad status, unexpected body) yields `None`.

use std::time::Duration;

use axum::http::HeaderMap;
use serde::Deserialize;

/// Country and city of a client IP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeoLocation {
    #[serde(default, alias = "country_name")]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum GeoError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Geolocation service returned HTTP {0}")]
    HttpStatus(u16),
}

/// Best guess at the client IP from proxy headers.
///
/// Takes the first `x-forwarded-for` entry, then `x-real-ip`.
pub fn client_ip(headers: &HeaderMap) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim);
    let real = || {
        headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
    };
    forwarded
        .filter(|ip| !ip.is_empty())
        .or_else(|| real().filter(|ip| !ip.is_empty()))
        .map(str::to_string)
}

/// `GET {base_url}/{ip}` with a short timeout.
pub async fn locate(
    client: &reqwest::Client,
    base_url: &str,
    ip: &str,
    timeout: Duration,
) -> Option<GeoLocation> {
    match try_locate(client, base_url, ip, timeout).await {
        Ok(location) => Some(location),
        Err(e) => {
            tracing::debug!(ip, error = %e, "Reverse geolocation failed");
            None
        }
    }
}

async fn try_locate(
    client: &reqwest::Client,
    base_url: &str,
    ip: &str,
    timeout: Duration,
) -> Result<GeoLocation, GeoError> {
    let url = format!("{}/{ip}", base_url.trim_end_matches('/'));
    let response = client.get(url).timeout(timeout).send().await?;
    if !response.status().is_success() {
        return Err(GeoError::HttpStatus(response.status().as_u16()));
    }
    Ok(response.json::<GeoLocation>().await?)
}
