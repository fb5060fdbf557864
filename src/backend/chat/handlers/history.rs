/**
 * History Handler
 *
 * `GET /api/messages` returns the full message log as a JSON array in
 * append order. Clients call it once per session, then follow live updates
 * over a persistent connection.
 */

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::backend::chat::relay::Relay;
use crate::shared::ChatMessage;

/// Handle history fetch (GET /api/messages)
///
/// Storage faults are not surfaced: an unreadable log is served as an
/// empty array.
pub async fn handle_get_messages(State(relay): State<Arc<Relay>>) -> Json<Vec<ChatMessage>> {
    let messages = relay.history().await;
    tracing::debug!("[Server] Serving {} messages of history", messages.len());
    Json(messages)
}
