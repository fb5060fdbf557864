//! WebSocket handler for the persistent relay connection.
//!
//! Client -> Relay (JSON):
//! ```json
//! {"type": "message", "payload": {"userId": "u1", "username": "alice", "text": "hi"}}
//! ```
//!
//! Relay -> Client (JSON), pushed to every live connection per accepted
//! message, the submitter included:
//! ```json
//! {"type": "message", "payload": {"id": "...", "username": "alice", "createdAt": "...", ...}}
//! ```
//!
//! Nothing is sent on open and history is not replayed. Unparseable or
//! rejected frames are logged and dropped; the connection stays open.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};

use crate::backend::chat::relay::Relay;
use crate::backend::realtime::{ConnectionHandle, Membership};
use crate::backend::server::state::AppState;
use crate::shared::ClientEvent;

/// WebSocket upgrade handler (GET / and GET /ws)
pub async fn handle_socket_upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    let relay = state.relay.clone();
    ws.max_message_size(state.config.max_body_bytes)
        .on_upgrade(move |socket| handle_socket(socket, relay))
}

/// Drive one connection from OPEN to CLOSED
///
/// The connection joins the live set once the handshake completes and
/// leaves it on close, protocol error, transport failure or eviction. A
/// writer task drains the connection's outbound queue; the read loop below
/// feeds in-band submissions to the relay. Eviction ends the loop and drops
/// the socket, so an evicted client sees its connection close.
async fn handle_socket(socket: WebSocket, relay: Arc<Relay>) {
    let (mut ws_sender, mut ws_receiver) = socket.split();
    let Membership {
        handle,
        mut outbound,
        mut evicted,
    } = relay.connect().await;

    let mut send_task = tokio::spawn(async move {
        while let Some(frame) = outbound.recv().await {
            if ws_sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
        let _ = ws_sender.close().await;
    });

    loop {
        tokio::select! {
            incoming = ws_receiver.next() => match incoming {
                Some(Ok(Message::Text(text))) => handle_frame(&relay, handle, text.as_str()).await,
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {} // Binary is ignored; ping/pong handled by the transport.
                Some(Err(e)) => {
                    tracing::debug!("[Socket] Connection {} transport error: {}", handle, e);
                    break;
                }
            },
            // Writer ended: the peer stopped accepting frames.
            _ = &mut send_task => break,
            // Dropped from the live set, most likely for not reading.
            _ = &mut evicted => {
                tracing::info!("[Socket] Connection {} evicted, closing", handle);
                break;
            }
        }
    }

    relay.disconnect(handle).await;
    send_task.abort();
}

/// Feed one in-band text frame to the relay
async fn handle_frame(relay: &Relay, handle: ConnectionHandle, frame: &str) {
    let submission = match ClientEvent::parse(frame) {
        Ok(ClientEvent::Message(submission)) => submission,
        Err(e) => {
            tracing::warn!("[Socket] Dropping frame from {}: {}", handle, e);
            return;
        }
    };

    // Rejections are already logged by the relay; nothing goes back on the wire.
    let _ = relay.accept_submission(submission).await;
}
