//! Backend Module
//!
//! This module contains all server-side code for the chat relay: an Axum
//! HTTP server that accepts persistent WebSocket connections, accepts new
//! chat messages over HTTP or in-band, appends them to a JSON message log
//! and broadcasts each accepted message to every live connection.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`chat`** - Message log, relay pipeline and transport handlers
//! - **`realtime`** - Live connection set and broadcast fan-out
//! - **`error`** - Backend error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs      - Module exports and documentation
//! ├── main.rs     - Binary entry point
//! ├── server/     - Server initialization and state
//! ├── routes/     - Route configuration
//! ├── chat/       - Log, relay and handlers
//! ├── realtime/   - Live connection set
//! └── error/      - Error types
//! ```
//!
//! # Control Flow
//!
//! ```text
//! POST /api/messages ─┐
//!                     ├─> Relay::accept_submission ─> MessageLog::append
//! WS {"type":"message"}┘                            └> LiveConnections::broadcast
//! ```
//!
//! Submission handling is serialized by the relay: the on-disk order equals
//! acceptance order, and every live connection observes that same order.
//!
//! # Error Handling
//!
//! - `BackendError` for handler and start-up errors
//! - Rejected submissions answer `400 {"error":"invalid"}` over HTTP and
//!   are dropped silently in-band
//! - Storage faults are logged and never reach clients

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Chat log, relay and handlers
pub mod chat;

/// Live connection set
pub mod realtime;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use chat::{MessageLog, Relay};
pub use error::BackendError;
pub use realtime::{ConnectionHandle, LiveConnections};
pub use server::{create_app, serve, AppState};
