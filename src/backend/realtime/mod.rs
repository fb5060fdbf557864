//! Real-time Update Module
//!
//! This module holds the Live Connection Set: the relay's only in-memory
//! state, membership of which is added on connect and removed on
//! disconnect or transport error.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! └── connections.rs  - Live connection set and broadcast fan-out
//! ```
//!
//! # Delivery
//!
//! Broadcast queues one serialized frame on every member. Each member's
//! queue is drained in order by its own writer task, so every connection
//! sees frames in the order they were broadcast. A member that falls too
//! far behind is evicted and its connection is closed.

/// Live connection set and fan-out
pub mod connections;

pub use connections::{ConnectionHandle, LiveConnections, Membership, OUTBOUND_QUEUE_CAPACITY};
