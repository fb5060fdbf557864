/**
 * Server Initialization
 *
 * This module handles the initialization of the relay: opening the message
 * log, creating the relay state, building the router and serving it.
 *
 * # Initialization Process
 *
 * 1. Open (or create) the message log in the data directory
 * 2. Create the relay, seeding ids from the existing history
 * 3. Create the router with all routes and middleware
 * 4. Bind the listener and serve until a shutdown signal arrives
 *
 * Live connections are not persisted; clients reconnect after a restart.
 */

use axum::Router;
use tokio::net::TcpListener;

use crate::backend::chat::{relay::Relay, store::MessageLog};
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::shared::RelayConfig;

/// Create the relay state for `config`
///
/// # Errors
///
/// Returns a storage fault if the data directory or log cannot be created.
pub async fn create_state(config: RelayConfig) -> Result<AppState, BackendError> {
    tracing::info!("Initializing chat relay");

    let log = MessageLog::open(&config.data_dir).await?;
    let relay = Relay::new(log).await;

    Ok(AppState::new(relay, config))
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: RelayConfig) -> Result<Router<()>, BackendError> {
    let app_state = create_state(config).await?;
    let app = create_router(app_state);
    tracing::info!("Router configured");
    Ok(app)
}

/// Bind the configured address and serve until Ctrl-C or SIGTERM
pub async fn serve(config: RelayConfig) -> Result<(), BackendError> {
    let addr = config.bind_addr();
    let app = create_app(config).await?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Chat relay listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Chat relay stopped");
    Ok(())
}

/// Resolves on SIGINT (Ctrl+C) or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received SIGINT (Ctrl+C), shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
