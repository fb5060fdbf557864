//! Server Module
//!
//! This module contains the code for initializing and running the relay's
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs     - Module exports and documentation
//! ├── state.rs   - AppState and FromRef implementations
//! ├── config.rs  - Configuration loading (.env + environment)
//! ├── health.rs  - GET /health
//! └── init.rs    - State creation, app creation, serving
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `.env`, then environment, then defaults
//! 2. **State Creation**: message log and relay
//! 3. **Router Creation**: routes and middleware
//! 4. **Serving**: until SIGINT / SIGTERM
//!
//! # Example
//!
//! ```rust,no_run
//! use darkchat::backend::server::{config::load_config, serve};
//!
//! # async fn example() -> Result<(), darkchat::backend::BackendError> {
//! let config = load_config()?;
//! serve(config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Health endpoint
pub mod health;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{create_app, create_state, serve};
pub use state::AppState;
