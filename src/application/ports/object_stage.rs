use std::time::Duration;

use async_trait::async_trait;

use crate::domain::StorageKey;

/// Remote object stage area reachable via pre-signed writes and
/// server-side authenticated reads.
#[async_trait]
pub trait ObjectStage: Send + Sync {
    /// Issues a time-limited PUT URL scoped to exactly `key` and
    /// `content_type`.
    async fn issue_write_url(
        &self,
        key: &StorageKey,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, ObjectStageError>;

    /// Downloads the object at `key` in full.
    async fn fetch(&self, key: &StorageKey) -> Result<Vec<u8>, ObjectStageError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ObjectStageError {
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("signing failed: {0}")]
    SignFailed(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
}
