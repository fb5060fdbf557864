/**
 * Message Log
 *
 * This module provides the durable, append-only store of chat messages:
 * a single JSON array file (`<data_dir>/messages.json`) holding every
 * accepted message in append order.
 *
 * # Reads
 *
 * `read_all` fails soft: an unreadable or corrupt log is reported on the
 * operator log and yields an empty history. `load` is the strict variant
 * used by `append`.
 *
 * # Writes
 *
 * `append` rewrites the whole array into a sibling temporary file, syncs it,
 * renames it over the log and syncs the data directory (on Unix), so
 * readers only ever see a complete array.
 * Callers must serialize appends; `Relay` does so with its sequence lock.
 */

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::shared::{ChatMessage, SharedError};

/// File name of the log inside the data directory
pub const LOG_FILE_NAME: &str = "messages.json";

/// Append-only message log backed by a JSON array file
#[derive(Debug, Clone)]
pub struct MessageLog {
    path: PathBuf,
}

impl MessageLog {
    /// Open the log in `data_dir`, creating the directory and an empty
    /// `[]` log if either is missing
    ///
    /// # Errors
    ///
    /// `SharedError::StorageFault` if the directory or file cannot be created.
    pub async fn open(data_dir: impl AsRef<Path>) -> Result<Self, SharedError> {
        let data_dir = data_dir.as_ref();
        tokio::fs::create_dir_all(data_dir).await.map_err(|e| {
            SharedError::storage_write(format!("create data dir {}: {}", data_dir.display(), e))
        })?;

        let path = data_dir.join(LOG_FILE_NAME);
        let exists = tokio::fs::try_exists(&path).await.map_err(|e| {
            SharedError::storage_read(format!("stat {}: {}", path.display(), e))
        })?;
        if !exists {
            tokio::fs::write(&path, b"[]").await.map_err(|e| {
                SharedError::storage_write(format!("initialize {}: {}", path.display(), e))
            })?;
            tracing::info!("[Store] Initialized empty message log at {}", path.display());
        }

        Ok(Self { path })
    }

    /// Location of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every stored message in append order
    ///
    /// Storage faults are logged and degrade to an empty history.
    pub async fn read_all(&self) -> Vec<ChatMessage> {
        match self.load().await {
            Ok(messages) => messages,
            Err(e) => {
                tracing::error!("[Store] Failed to read messages, serving empty history: {}", e);
                Vec::new()
            }
        }
    }

    /// Every stored message in append order, failing on storage faults
    pub async fn load(&self) -> Result<Vec<ChatMessage>, SharedError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SharedError::storage_read(format!("read {}: {}", self.path.display(), e))
        })?;

        // A zero-length file counts as an empty log.
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            SharedError::storage_read(format!("parse {}: {}", self.path.display(), e))
        })
    }

    /// Add one message to the end of the log and persist the whole log
    ///
    /// Existing entries are never reordered or dropped: if the current log
    /// cannot be read, nothing is written and a storage fault is returned.
    pub async fn append(&self, message: &ChatMessage) -> Result<(), SharedError> {
        let mut messages = self.load().await?;
        messages.push(message.clone());
        self.persist(&messages).await?;
        tracing::debug!(
            "[Store] Appended message {} ({} messages in log)",
            message.id,
            messages.len()
        );
        Ok(())
    }

    async fn persist(&self, messages: &[ChatMessage]) -> Result<(), SharedError> {
        let body = serde_json::to_vec_pretty(messages)?;
        let tmp_path = self.path.with_extension("json.tmp");
        let write_err =
            |e: std::io::Error| SharedError::storage_write(format!("write {}: {}", tmp_path.display(), e));

        let mut file = tokio::fs::File::create(&tmp_path).await.map_err(write_err)?;
        file.write_all(&body).await.map_err(write_err)?;
        file.sync_all().await.map_err(write_err)?;
        drop(file);

        tokio::fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            SharedError::storage_write(format!("replace {}: {}", self.path.display(), e))
        })?;

        self.sync_dir().await
    }

    /// Flush the directory entry so the rename itself survives a crash
    #[cfg(unix)]
    async fn sync_dir(&self) -> Result<(), SharedError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let sync_err =
            |e: std::io::Error| SharedError::storage_write(format!("sync {}: {}", dir.display(), e));

        let handle = tokio::fs::File::open(dir).await.map_err(sync_err)?;
        handle.sync_all().await.map_err(sync_err)
    }

    #[cfg(not(unix))]
    async fn sync_dir(&self) -> Result<(), SharedError> {
        Ok(())
    }
}
