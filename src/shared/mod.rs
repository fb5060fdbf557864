//! Shared Module
//!
//! This module contains the types that are shared between the relay and its
//! clients. These types are used for serialization over the HTTP API, the
//! persistent connection and the on-disk message log.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types with no I/O. All
//! types are designed for JSON serialization.

/// Chat message data structures
pub mod message;

/// Persistent-connection event framing
pub mod event;

/// Shared error types
pub mod error;

/// Relay configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use message::{Attachment, ChatMessage, NewMessage};
pub use event::{ClientEvent, RelayEvent};
pub use error::SharedError;
pub use config::{ConfigError, RelayConfig, RelayConfigBuilder};
