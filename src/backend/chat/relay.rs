/**
 * Relay
 *
 * The relay owns the message log and the live connection set and keeps them
 * consistent. Every submission, whichever transport it arrived on, goes
 * through `Relay::accept_submission`:
 *
 * 1. validate the submission fields
 * 2. stamp `id` and `createdAt`
 * 3. append to the message log
 * 4. broadcast to every live connection, the submitter included
 *
 * Steps 2-4 run under the sequence lock, so the log order, the id order and
 * the order each connection observes are the same global order.
 *
 * # Delivery over durability
 *
 * A failed append is logged and the message is still broadcast: live
 * viewers get the message even when the log write failed, and operators
 * recover from the error log.
 */

use chrono::{DateTime, SecondsFormat, Utc};
use tokio::sync::Mutex;

use crate::backend::chat::store::MessageLog;
use crate::backend::realtime::{ConnectionHandle, LiveConnections, Membership};
use crate::shared::{ChatMessage, NewMessage, RelayEvent, SharedError};

/// Id and timestamp source for accepted messages
///
/// Ids are Unix milliseconds, bumped past the previous id when the clock
/// has not advanced (saturating at `i64::MAX`). Timestamps never go
/// backwards.
#[derive(Debug)]
struct Sequence {
    last_id: i64,
    last_created_at: Option<DateTime<Utc>>,
}

impl Sequence {
    fn from_history(history: &[ChatMessage]) -> Self {
        let last_id = history
            .iter()
            .filter_map(|m| m.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        let last_created_at = history
            .iter()
            .filter_map(|m| DateTime::parse_from_rfc3339(&m.created_at).ok())
            .map(|t| t.with_timezone(&Utc))
            .max();

        Self {
            last_id,
            last_created_at,
        }
    }

    fn next(&mut self, now: DateTime<Utc>) -> (String, String) {
        let id = now.timestamp_millis().max(self.last_id.saturating_add(1));
        self.last_id = id;

        let created_at = match self.last_created_at {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_created_at = Some(created_at);

        (
            id.to_string(),
            created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        )
    }
}

/// Chat relay: message log plus live connection set
pub struct Relay {
    log: MessageLog,
    connections: LiveConnections,
    sequence: Mutex<Sequence>,
}

impl Relay {
    /// Create a relay over an opened log
    ///
    /// The existing history seeds the id and timestamp sequence so that
    /// messages accepted after a restart still sort after older ones.
    pub async fn new(log: MessageLog) -> Self {
        let history = log.read_all().await;
        tracing::info!("[Relay] Loaded {} messages from {}", history.len(), log.path().display());

        Self {
            sequence: Mutex::new(Sequence::from_history(&history)),
            log,
            connections: LiveConnections::new(),
        }
    }

    /// The message log
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    /// The live connection set
    pub fn connections(&self) -> &LiveConnections {
        &self.connections
    }

    /// Full history in append order (empty on storage faults)
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.log.read_all().await
    }

    /// Register a new live connection
    pub async fn connect(&self) -> Membership {
        self.connections.connect().await
    }

    /// Remove a live connection; idempotent
    pub async fn disconnect(&self, handle: ConnectionHandle) {
        self.connections.disconnect(handle).await;
    }

    /// Validate, store and broadcast one submission
    ///
    /// # Errors
    ///
    /// `SharedError::ValidationError` when the submission is rejected. A
    /// rejected submission is neither stored nor broadcast. Storage faults
    /// are logged, not returned.
    pub async fn accept_submission(&self, submission: NewMessage) -> Result<ChatMessage, SharedError> {
        if let Err(e) = submission.validate() {
            tracing::warn!("[Relay] Rejected submission: {}", e);
            return Err(e);
        }

        let mut sequence = self.sequence.lock().await;
        let (id, created_at) = sequence.next(Utc::now());
        let message = submission.into_message(id, created_at);

        if let Err(e) = self.log.append(&message).await {
            tracing::error!(
                "[Relay] Message {} not durably recorded, broadcasting anyway: {}",
                message.id,
                e
            );
        }

        match RelayEvent::Message(message.clone()).to_frame() {
            Ok(frame) => {
                let delivered = self.connections.broadcast(&frame).await;
                tracing::info!(
                    "[Relay] Accepted message {} from {}, delivered to {} connections",
                    message.id,
                    message.username,
                    delivered
                );
            }
            Err(e) => {
                tracing::error!("[Relay] Failed to encode message {}: {}", message.id, e);
            }
        }

        drop(sequence);
        Ok(message)
    }
}
