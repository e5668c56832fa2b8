use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wells_api::config::{ServerConfig, StoreKind};
use wells_api::router::build_app_router;
use wells_api::state::AppState;
use wells_api::templates::Templates;
use wells_db::config::DbConfig;
use wells_db::store::{MemoryWellStore, PgWellStore, WellStore};
use wells_db::DbPool;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wells_api=debug,wells_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(host = %config.host, port = %config.port, store = ?config.store, "Loaded server configuration");

    // --- Templates ---
    let templates = match &config.template_dir {
        Some(dir) => Templates::from_dir(dir),
        None => Templates::embedded(),
    }
    .expect("Failed to load templates");

    // --- Store ---
    let (store, pool): (Arc<dyn WellStore>, Option<DbPool>) = match config.store {
        StoreKind::Postgres => {
            let db_config = DbConfig::from_env().expect("Invalid database configuration");

            let pool = wells_db::create_pool(&db_config)
                .await
                .expect("Failed to connect to database");
            tracing::info!(host = %db_config.host, database = %db_config.database, "Database connection pool created");

            wells_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            wells_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            let store: Arc<dyn WellStore> = Arc::new(PgWellStore::new(pool.clone()));
            (store, Some(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("Using the in-memory well store; records are lost on exit");
            let store: Arc<dyn WellStore> = Arc::new(MemoryWellStore::new());
            (store, None)
        }
    };

    // --- App state ---
    let state = AppState {
        store,
        templates: Arc::new(templates),
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

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    if let Some(pool) = pool {
        let timeout = Duration::from_secs(config.shutdown_timeout_secs);
        if tokio::time::timeout(timeout, pool.close()).await.is_err() {
            tracing::warn!(?timeout, "Timed out closing the database pool");
        } else {
            tracing::info!("Database pool closed");
        }
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
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
