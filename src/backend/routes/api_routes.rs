/**
 * API Route Configuration
 *
 * # Routes
 *
 * - `GET /api/messages` - Full history in append order
 * - `POST /api/messages` - Submit a message (201 / 400)
 * - `GET /health` - Liveness and live connection count
 */

use axum::Router;

use crate::backend::chat::handlers::{handle_get_messages, handle_submit_message};
use crate::backend::server::health::handle_health;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// All routes are public: the relay performs no authentication and
/// accepts any claimed identity.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/api/messages",
            axum::routing::get(handle_get_messages).post(handle_submit_message),
        )
        .route("/health", axum::routing::get(handle_health))
}
