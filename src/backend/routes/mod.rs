//! Route Configuration Module
//!
//! This module configures all HTTP routes for the relay.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Main router creation and middleware
//! └── api_routes.rs  - JSON API endpoints
//! ```
//!
//! # Routes
//!
//! - `GET /`, `GET /ws` - WebSocket upgrade for live updates
//! - `GET /api/messages` - History fetch
//! - `POST /api/messages` - Message submission
//! - `GET /health` - Liveness

/// Main router creation
pub mod router;

/// API endpoint configuration
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
