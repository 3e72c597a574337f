//! Paste Playground - browse scraped pastes and run them locally
//!
//! Binary entry point: configuration, logging, server and shutdown.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paste_playground::api::create_router;
use paste_playground::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the Paste Playground server.
///
/// # Startup Sequence
/// 1. Load an optional `.env` file
/// 2. Initialize tracing subscriber for logging
/// 3. Load configuration from environment variables
/// 4. Create the paste cache, upstream client and code runner
/// 5. Start the background cache sweeper (unless disabled)
/// 6. Create Axum router with all endpoints
/// 7. Start HTTP server on configured port
/// 8. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the environment still applies
    let _ = dotenvy::dotenv();

    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paste_playground=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Paste Playground");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, cleanup_interval={}s, port={}, upstream={}",
        config.cache_ttl, config.cleanup_interval, config.server_port, config.upstream_url
    );

    let state = AppState::from_config(&config).context("failed to initialize application state")?;
    info!("Paste cache initialized");

    let cleanup_handle = if config.cleanup_interval > 0 {
        let handle = spawn_cleanup_task(state.cache.clone(), config.cleanup_interval);
        info!("Background cache sweeper started");
        Some(handle)
    } else {
        info!("Background cache sweeper disabled, expiry is lazy only");
        None
    };

    let app = create_router(state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweeper and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cache sweeper aborted");
    }
}
