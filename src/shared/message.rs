/**
 * Chat Message Data Structures
 *
 * This module defines the records that travel between the relay and its
 * clients and that are written to the message log:
 *
 * - `ChatMessage` - a stored, accepted message (the unit of the log)
 * - `Attachment` - an inline file carried by a message
 * - `NewMessage` - the fields a client submits; the relay assigns the rest
 *
 * All types serialize with camelCase field names so the JSON matches what
 * the web client sends and renders.
 */
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// An inline file attached to a message.
///
/// `url` is a self-contained data URI (`data:image/png;base64,...`); the
/// relay never dereferences it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    /// Original file name
    pub name: String,
    /// MIME type, e.g. `image/png`
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Data URI holding the file content
    pub url: String,
}

/// A message accepted by the relay and recorded in the log.
///
/// # Fields
/// * `id` - Opaque key, unique and increasing within the log
/// * `user_id` / `username` - Claimed identity of the sender (never verified)
/// * `avatar` - Display-only URI, empty when the sender has none
/// * `text` - Message body, may be empty only when attachments are present
/// * `attachments` - Inline files, possibly none
/// * `created_at` - RFC3339 acceptance time, set by the relay
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub created_at: String,
}

/// Submission fields sent by a client, over HTTP or in-band.
///
/// Every field is optional on the wire so that a missing field surfaces as
/// a validation failure instead of a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

impl NewMessage {
    /// Create a text-only submission
    ///
    /// # Example
    /// ```rust
    /// use darkchat::shared::NewMessage;
    ///
    /// let submission = NewMessage::text("u1", "alice", "hello");
    /// assert!(submission.validate().is_ok());
    /// ```
    pub fn text(user_id: impl Into<String>, username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            username: Some(username.into()),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Add an attachment to the submission
    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.get_or_insert_with(Vec::new).push(attachment);
        self
    }

    /// Set the avatar shown next to the message
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Check the submission against the acceptance rules
    ///
    /// A submission is accepted when `username` is non-blank and it carries
    /// either non-blank `text` or at least one attachment.
    ///
    /// # Errors
    ///
    /// Returns `SharedError::ValidationError` naming the offending field.
    pub fn validate(&self) -> Result<(), SharedError> {
        if is_blank(self.username.as_deref()) {
            return Err(SharedError::validation("username", "username is required"));
        }

        let has_attachments = self.attachments.as_ref().is_some_and(|a| !a.is_empty());
        if is_blank(self.text.as_deref()) && !has_attachments {
            return Err(SharedError::validation(
                "text",
                "text or at least one attachment is required",
            ));
        }

        Ok(())
    }

    /// Turn a validated submission into a stored message
    ///
    /// The caller supplies the server-assigned `id` and `created_at`.
    pub fn into_message(self, id: String, created_at: String) -> ChatMessage {
        ChatMessage {
            id,
            user_id: self.user_id.unwrap_or_default(),
            username: self.username.unwrap_or_default(),
            avatar: self.avatar.unwrap_or_default(),
            text: self.text.unwrap_or_default(),
            attachments: self.attachments.unwrap_or_default(),
            created_at,
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
