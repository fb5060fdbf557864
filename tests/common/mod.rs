//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - Relay fixtures backed by a temporary data directory
//! - A live listener for WebSocket clients
//! - Request and frame helpers

#![cfg(feature = "ssr")]
#![allow(dead_code)]

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use futures_util::{SinkExt, StreamExt};
use tempfile::TempDir;
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tower::ServiceExt;

use darkchat::backend::routes::create_router;
use darkchat::backend::server::{create_state, AppState};
use darkchat::shared::{ChatMessage, RelayConfig};

pub type TestSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// How long a test waits for a frame or a state change
pub const WAIT: Duration = Duration::from_secs(5);

/// Loopback configuration pointing at `dir`
///
/// `TestRelay::spawn` binds its own ephemeral port, so the configured port
/// is never used.
pub fn test_config(dir: &TempDir) -> RelayConfig {
    RelayConfig::builder()
        .host(Ipv4Addr::LOCALHOST.into())
        .data_dir(dir.path())
        .build()
        .expect("valid test config")
}

/// A relay with its router, backed by a temporary data directory
pub struct TestRelay {
    pub dir: TempDir,
    pub state: AppState,
    pub app: Router,
}

impl TestRelay {
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        Self::in_dir(dir).await
    }

    pub async fn with_config(dir: TempDir, config: RelayConfig) -> Self {
        let state = create_state(config).await.expect("relay state");
        let app = create_router(state.clone());
        Self { dir, state, app }
    }

    pub async fn in_dir(dir: TempDir) -> Self {
        let config = test_config(&dir);
        Self::with_config(dir, config).await
    }

    /// Send one request through the router
    pub async fn request(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.app.clone().oneshot(request).await.expect("router response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body bytes");
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, body)
    }

    pub async fn post_message(&self, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.request(post_json("/api/messages", body.to_string())).await
    }

    pub async fn history(&self) -> Vec<ChatMessage> {
        let (status, body) = self.request(get("/api/messages")).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_value(body).expect("history is a message array")
    }

    /// Bind a loopback listener and serve the router on it
    pub async fn spawn(&self) -> (SocketAddr, JoinHandle<()>) {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let app = self.app.clone();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });
        (addr, handle)
    }

    /// Wait until the relay has exactly `count` live connections
    pub async fn wait_for_connections(&self, count: usize) {
        let relay = self.state.relay.clone();
        tokio::time::timeout(WAIT, async move {
            while relay.connections().len().await != count {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("connection count reached");
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .expect("request")
}

pub fn submission(username: &str, text: &str) -> serde_json::Value {
    serde_json::json!({
        "userId": format!("{username}-id"),
        "username": username,
        "text": text,
    })
}

/// Open a WebSocket to `path` on a spawned relay
pub async fn ws_connect(addr: SocketAddr, path: &str) -> TestSocket {
    let (socket, _response) = connect_async(format!("ws://{addr}{path}")).await.expect("ws connect");
    socket
}

/// Send an in-band `message` event
pub async fn ws_submit(socket: &mut TestSocket, payload: serde_json::Value) {
    let frame = serde_json::json!({ "type": "message", "payload": payload });
    socket.send(Message::Text(frame.to_string().into())).await.expect("ws send");
}

/// Receive the next `message` event and return its payload
pub async fn ws_next_message(socket: &mut TestSocket) -> ChatMessage {
    loop {
        let frame = tokio::time::timeout(WAIT, socket.next())
            .await
            .expect("frame before timeout")
            .expect("stream open")
            .expect("frame ok");

        if let Message::Text(text) = frame {
            let event: serde_json::Value = serde_json::from_str(text.as_str()).expect("json frame");
            assert_eq!(event["type"], "message");
            return serde_json::from_value(event["payload"].clone()).expect("message payload");
        }
    }
}

/// Assert nothing arrives on `socket` for a short while
pub async fn ws_assert_silent(socket: &mut TestSocket) {
    let next = tokio::time::timeout(Duration::from_millis(200), socket.next()).await;
    assert!(next.is_err(), "unexpected frame: {:?}", next);
}
