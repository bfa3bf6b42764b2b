//! Feedback Server — feedback collection service
//!
//! Main entry point that wires all crates together and starts the server.

use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use feedback_core::config::AppConfig;
use feedback_core::error::AppError;
use feedback_storage::FeedbackStore;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("FEEDBACK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting feedback server v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Prepare the data file ────────────────────────────
    let data_path = config.storage.data_path();
    tracing::info!(path = %data_path.display(), "Preparing feedback store...");
    feedback_storage::JsonFileStore::new(&data_path)
        .ensure_exists()
        .await?;

    // ── Step 2: Build state and router ───────────────────────────
    let addr = config.server.bind_address();
    let shutdown_grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let app_state = feedback_api::AppState::from_config(config);
    let app = feedback_api::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Feedback server listening on {}", addr);

    // ── Step 3: Graceful shutdown ────────────────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, draining connections...");
        let _ = shutdown_tx.send(true);
    });
    let server = tokio::spawn(async move { server.await });

    // Bound the drain once the signal has fired.
    let _ = shutdown_rx.changed().await;
    match tokio::time::timeout(shutdown_grace, server).await {
        Ok(Ok(Ok(()))) => {}
        Ok(Ok(Err(e))) => return Err(AppError::internal(format!("Server error: {}", e))),
        Ok(Err(e)) => return Err(AppError::internal(format!("Server task failed: {}", e))),
        Err(_) => tracing::warn!(
            grace_seconds = shutdown_grace.as_secs(),
            "Graceful shutdown timed out"
        ),
    }

    tracing::info!("Feedback server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
