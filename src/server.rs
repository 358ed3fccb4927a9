//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, migrations and the Axum server lifecycle,
//! including graceful shutdown on Ctrl-C or SIGTERM.

use crate::config::{Config, StorageBackend};
use crate::infrastructure::persistence::pool;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Builds the application state for the configured storage backend.
///
/// For SQLite this opens the pool and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrated.
pub async fn build_state(config: &Config) -> Result<AppState> {
    match config.storage {
        StorageBackend::Sqlite => {
            let pool = pool::connect(
                &config.database_url,
                config.db_max_connections,
                config.acquire_timeout(),
            )
            .await?;
            tracing::info!("Connected to database");

            pool::run_migrations(&pool).await?;
            tracing::info!("Migrations applied");

            Ok(AppState::with_sqlite(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on exit");
            Ok(AppState::in_memory())
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }

    tracing::info!("Shutdown signal received, draining connections");
}
