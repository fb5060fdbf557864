/**
 * Real-time Event Framing
 *
 * Frames exchanged over a persistent connection use a `{ type, payload }`
 * envelope:
 *
 * - Client -> Relay: `{"type":"message","payload":{<NewMessage>}}`
 * - Relay -> Client: `{"type":"message","payload":{<ChatMessage>}}`
 *
 * The relay sends nothing on open; every frame it pushes is the broadcast
 * of an accepted message.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;
use crate::shared::message::{ChatMessage, NewMessage};

/// Frame sent by a client over an open connection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Submit a new chat message
    Message(NewMessage),
}

/// Frame pushed by the relay to every live connection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum RelayEvent {
    /// A message was accepted and stored
    Message(ChatMessage),
}

impl ClientEvent {
    /// Parse a text frame received from a client
    ///
    /// # Errors
    ///
    /// `SharedError::MalformedPayload` when the frame is not valid JSON or
    /// not a known event.
    pub fn parse(frame: &str) -> Result<Self, SharedError> {
        serde_json::from_str(frame).map_err(|e| SharedError::malformed(e.to_string()))
    }
}

impl RelayEvent {
    /// Serialize the event into the text frame sent to clients
    pub fn to_frame(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string(self)?)
    }
}
