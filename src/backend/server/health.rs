//! Liveness endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::backend::chat::relay::Relay;

/// Handle health check (GET /health)
///
/// Reports the number of live connections alongside the status.
pub async fn handle_health(State(relay): State<Arc<Relay>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "connections": relay.connections().len().await,
    }))
}
