/**
 * Message Submission Handler
 *
 * This module implements `POST /api/messages`, the request/response entry
 * point for submitting a chat message.
 *
 * The handler only parses the HTTP framing; validation, storage and
 * broadcast happen in `Relay::accept_submission`, the same path the
 * persistent-connection handler uses.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::backend::chat::relay::Relay;
use crate::backend::error::BackendError;
use crate::shared::{ChatMessage, NewMessage, SharedError};

/// Handle message submission (POST /api/messages)
///
/// # Request Body
///
/// JSON object with:
/// - `userId`: String - claimed sender id
/// - `username`: String - claimed sender name (required)
/// - `avatar`: String - optional display URI
/// - `text`: String - message body (required unless attachments are present)
/// - `attachments`: Array - optional `{name, type, url}` entries
///
/// # Returns
///
/// `201 Created` with the stored message
///
/// # Errors
///
/// * `400 Bad Request` with `{"error":"invalid"}` - If the body is not a JSON
///   object or the submission fails validation
///
/// # Example Request
///
/// ```http
/// POST /api/messages HTTP/1.1
/// Content-Type: application/json
///
/// {"userId":"u1","username":"alice","text":"hello"}
/// ```
pub async fn handle_submit_message(
    State(relay): State<Arc<Relay>>,
    body: axum::body::Bytes,
) -> Result<(StatusCode, Json<ChatMessage>), BackendError> {
    let submission: NewMessage = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("[Server] Failed to parse submission body: {}", e);
        SharedError::malformed(e.to_string())
    })?;

    let message = relay.accept_submission(submission).await?;

    Ok((StatusCode::CREATED, Json(message)))
}
