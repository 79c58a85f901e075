use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JSON file with vehicle entries. When set, the power checker reads
    /// from this file instead of the `vehicles` table.
    pub vehicle_catalog_path: Option<String>,
    /// Reverse geolocation endpoint used to annotate analytics events.
    /// The client IP is appended as the last path segment.
    pub geolocation_url: Option<String>,
    /// Timeout for the geolocation call in milliseconds (default: `1500`).
    pub geolocation_timeout_ms: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `VEHICLE_CATALOG_PATH`   | unset (use database)       |
    /// | `GEOLOCATION_URL`        | unset (no geolocation)     |
    /// | `GEOLOCATION_TIMEOUT_MS` | `1500`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let geolocation_timeout_ms: u64 = std::env::var("GEOLOCATION_TIMEOUT_MS")
            .unwrap_or_else(|_| "1500".into())
            .parse()
            .expect("GEOLOCATION_TIMEOUT_MS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            vehicle_catalog_path: optional_env("VEHICLE_CATALOG_PATH"),
            geolocation_url: optional_env("GEOLOCATION_URL"),
            geolocation_timeout_ms,
            jwt: JwtConfig::from_env(),
        }
    }
}
