use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tuneshop_api::bootstrap::{ensure_admin, BootstrapAdmin};
use tuneshop_api::config::ServerConfig;
use tuneshop_api::router::build_app_router;
use tuneshop_api::state::AppState;
use tuneshop_api::vehicles::VehicleSource;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tuneshop_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = tuneshop_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    tuneshop_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    tuneshop_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Initial admin ---
    match BootstrapAdmin::from_env() {
        Some(admin) => match ensure_admin(&pool, &admin).await {
            Ok(true) => {}
            Ok(false) => tracing::debug!("Admin users exist, skipping bootstrap"),
            Err(e) => panic!("Failed to bootstrap admin user: {e}"),
        },
        None => tracing::debug!("ADMIN_USERNAME/ADMIN_PASSWORD not set, skipping bootstrap"),
    }

    // --- Vehicle data ---
    let vehicles = match config.vehicle_catalog_path.as_deref() {
        Some(path) => {
            let source = VehicleSource::from_file(path).unwrap_or_else(|e| panic!("{e}"));
            if let VehicleSource::Static(catalog) = &source {
                tracing::info!(path, entries = catalog.len(), "Loaded static vehicle catalog");
            }
            source
        }
        None => VehicleSource::Database,
    };

    // --- Outbound HTTP ---
    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(config.geolocation_timeout_ms))
        .build()
        .expect("Failed to build reqwest HTTP client");

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        vehicles,
        http,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
