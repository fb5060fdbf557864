//! Chat Handlers Module
//!
//! This module contains the Axum handlers for the relay's endpoints. Each
//! handler is a thin adapter that parses its transport's framing and hands
//! submissions to `Relay::accept_submission`.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── history.rs  - GET /api/messages
//! ├── submit.rs   - POST /api/messages
//! └── socket.rs   - WebSocket connection (GET / and GET /ws)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use darkchat::backend::chat::handlers::{handle_get_messages, handle_submit_message};
//! use darkchat::backend::server::state::AppState;
//!
//! # fn example(state: AppState) -> Router {
//! Router::new()
//!     .route("/api/messages", get(handle_get_messages).post(handle_submit_message))
//!     .with_state(state)
//! # }
//! ```

/// History fetch handler
pub mod history;

/// Out-of-band submission handler
pub mod submit;

/// Persistent connection handler
pub mod socket;

pub use history::handle_get_messages;
pub use socket::handle_socket_upgrade;
pub use submit::handle_submit_message;
