/**
 * Application State Management
 *
 * This module defines the application state shared by all handlers and
 * the `FromRef` implementations for Axum state extraction.
 *
 * # Ownership
 *
 * The relay (and through it the message log and the live connection set)
 * is the only mutable state. It is reachable from handlers through
 * `AppState` and nowhere else.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::chat::relay::Relay;
use crate::shared::RelayConfig;

/// Application state shared by every request handler
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use axum::extract::State;
/// use darkchat::backend::chat::Relay;
///
/// async fn handler(State(relay): State<Arc<Relay>>) -> String {
///     relay.history().await.len().to_string()
/// }
/// ```
#[derive(Clone)]
pub struct AppState {
    /// The relay owning the message log and live connections
    pub relay: Arc<Relay>,

    /// Effective configuration (body limits are read per request)
    pub config: Arc<RelayConfig>,
}

impl AppState {
    pub fn new(relay: Relay, config: RelayConfig) -> Self {
        Self {
            relay: Arc::new(relay),
            config: Arc::new(config),
        }
    }
}

/// Lets handlers extract `State<Arc<Relay>>` directly
impl FromRef<AppState> for Arc<Relay> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.relay.clone()
    }
}

/// Lets handlers extract `State<Arc<RelayConfig>>` directly
impl FromRef<AppState> for Arc<RelayConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
