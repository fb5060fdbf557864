/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Socket routes (`/` and `/ws`, WebSocket upgrade)
 * 2. API routes (history, submit, health)
 * 3. Fallback handler (404)
 *
 * # Middleware
 *
 * - Body size limit from the configuration (attachments are inline)
 * - Permissive CORS (the web client is served from another origin)
 * - Request tracing
 */

use axum::{extract::DefaultBodyLimit, http::StatusCode, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::chat::handlers::handle_socket_upgrade;
use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the relay and configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let body_limit = app_state.config.max_body_bytes;

    // The web client connects to ws://host:port with no path.
    let router = Router::new()
        .route("/", axum::routing::get(handle_socket_upgrade))
        .route("/ws", axum::routing::get(handle_socket_upgrade));

    let router = configure_api_routes(router);

    let router = router.fallback(|| async {
        BackendError::handler(StatusCode::NOT_FOUND, "Not Found")
    });

    router
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
