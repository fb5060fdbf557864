//! Darkchat - Main Library
//!
//! Darkchat is a small real-time chat relay. Clients hold a persistent
//! WebSocket connection to receive every accepted message, submit new
//! messages over HTTP or in-band on the socket, and fetch the full history
//! on load. Accepted messages are appended to a JSON message log on disk.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the relay and its clients
//!   - Message structures and wire events
//!   - Relay configuration
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server with WebSocket upgrade
//!   - Message log persistence
//!   - Submission relay and live connection broadcast
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules and the `darkchat-relay` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use darkchat::backend::server::init::create_app;
//! use darkchat::shared::RelayConfig;
//!
//! # async fn example() -> Result<(), darkchat::backend::BackendError> {
//! let app = create_app(RelayConfig::default()).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - The live connection set is shared behind `Arc<Mutex<>>`
//! - Submissions are serialized by the relay so that log order and
//!   broadcast order agree
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation, payload and storage failures
//! - `backend::BackendError` for HTTP handlers and start-up

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
