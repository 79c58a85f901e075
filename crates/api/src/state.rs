use std::sync::Arc;

use crate::config::ServerConfig;
use crate::vehicles::VehicleSource;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable and never mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tuneshop_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Where power-checker data comes from.
    pub vehicles: VehicleSource,
    /// Outbound HTTP client (reverse geolocation).
    pub http: reqwest::Client,
}
