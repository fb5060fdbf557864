/**
 * Live Connection Set
 *
 * This module tracks the currently open client connections and fans
 * accepted messages out to them.
 *
 * # Membership
 *
 * Each member is an outbound queue (`mpsc::Sender<String>`) drained by that
 * connection's writer task, plus an eviction signal watched by the
 * connection's read loop. Members carry no identity beyond a random
 * handle; broadcast goes to every member unconditionally.
 *
 * # Eviction
 *
 * A member is evicted when its queue is closed (the connection ended) or
 * full (the client stopped reading). Eviction fires the member's signal so
 * the connection handler closes the socket; a connection never stays open
 * outside the set.
 */

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, Mutex};
use uuid::Uuid;

/// Frames a member may have queued before it counts as stalled
pub const OUTBOUND_QUEUE_CAPACITY: usize = 1024;

/// Opaque handle identifying one live connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionHandle(Uuid);

impl ConnectionHandle {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connection side of a new member
///
/// `evicted` resolves once the member has left the set, whether it was
/// evicted by a broadcast or removed with `disconnect`.
#[derive(Debug)]
pub struct Membership {
    pub handle: ConnectionHandle,
    pub outbound: mpsc::Receiver<String>,
    pub evicted: oneshot::Receiver<()>,
}

struct Member {
    outbound: mpsc::Sender<String>,
    evicted: Option<oneshot::Sender<()>>,
}

impl Member {
    fn evict(&mut self) {
        if let Some(signal) = self.evicted.take() {
            let _ = signal.send(());
        }
    }
}

/// The set of currently open connections
#[derive(Clone, Default)]
pub struct LiveConnections {
    members: Arc<Mutex<HashMap<ConnectionHandle, Member>>>,
}

impl LiveConnections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new member
    ///
    /// Returns its handle, the receiving end of its outbound queue and its
    /// eviction signal. No history is replayed.
    pub async fn connect(&self) -> Membership {
        let (outbound_tx, outbound) = mpsc::channel(OUTBOUND_QUEUE_CAPACITY);
        let (evicted_tx, evicted) = oneshot::channel();
        let handle = ConnectionHandle::new();

        let mut members = self.members.lock().await;
        members.insert(
            handle,
            Member {
                outbound: outbound_tx,
                evicted: Some(evicted_tx),
            },
        );
        tracing::info!("[Realtime] Connection {} opened ({} live)", handle, members.len());

        Membership {
            handle,
            outbound,
            evicted,
        }
    }

    /// Remove a member; a no-op if it is already gone
    pub async fn disconnect(&self, handle: ConnectionHandle) {
        let mut members = self.members.lock().await;
        if let Some(mut member) = members.remove(&handle) {
            member.evict();
            tracing::info!("[Realtime] Connection {} closed ({} live)", handle, members.len());
        }
    }

    /// Number of live members
    pub async fn len(&self) -> usize {
        self.members.lock().await.len()
    }

    /// Whether `handle` is still a member
    pub async fn contains(&self, handle: ConnectionHandle) -> bool {
        self.members.lock().await.contains_key(&handle)
    }

    /// Queue `frame` on every member in one pass
    ///
    /// Members whose queue is closed or full are evicted and signalled.
    /// Returns the number of members the frame was queued for.
    pub async fn broadcast(&self, frame: &str) -> usize {
        let mut members = self.members.lock().await;
        let mut delivered = 0;

        members.retain(|handle, member| match member.outbound.try_send(frame.to_owned()) {
            Ok(()) => {
                delivered += 1;
                true
            }
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!("[Realtime] Connection {} stalled, evicting", handle);
                member.evict();
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                tracing::debug!("[Realtime] Connection {} gone, evicting", handle);
                member.evict();
                false
            }
        });

        tracing::debug!("[Realtime] Frame queued for {} connections", delivered);
        delivered
    }
}
