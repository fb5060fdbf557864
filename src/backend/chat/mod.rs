//! Chat Backend Module
//!
//! This module contains all server-side chat functionality:
//! - The append-only message log
//! - The relay that validates, stores and broadcasts submissions
//! - HTTP and WebSocket handlers for the relay
//!
//! # Architecture
//!
//! - **`store`** - `MessageLog`, the JSON array file on disk
//! - **`relay`** - `Relay`, owning the log and the live connection set
//! - **`handlers`** - Transport adapters (history, submit, socket)
//!
//! # Example
//!
//! ```rust,no_run
//! use darkchat::backend::chat::{relay::Relay, store::MessageLog};
//! use darkchat::shared::NewMessage;
//!
//! # async fn example() -> Result<(), darkchat::shared::SharedError> {
//! let relay = Relay::new(MessageLog::open("data").await?).await;
//! let stored = relay.accept_submission(NewMessage::text("u1", "alice", "hello")).await?;
//! assert_eq!(relay.history().await.last(), Some(&stored));
//! # Ok(())
//! # }
//! ```

/// Message log persistence
pub mod store;

/// Submission pipeline and connection ownership
pub mod relay;

/// Axum handlers for chat endpoints
pub mod handlers;

pub use relay::Relay;
pub use store::MessageLog;
