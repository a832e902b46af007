use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::application::ports::{ObjectStage, ObjectStageError};
use crate::application::services::PipelineError;
use crate::domain::{StorageKey, UploadTicket};

/// Content type the mobile client records in.
pub const UPLOAD_CONTENT_TYPE: &str = "audio/mp4";

/// How long an issued write URL stays valid.
pub const UPLOAD_URL_TTL: Duration = Duration::from_secs(3600);

/// Issues one-shot upload tickets so clients can push recordings straight
/// to the object stage, bypassing this server for the transfer itself.
pub struct UploadService<S>
where
    S: ObjectStage,
{
    stage: Arc<S>,
}

impl<S> UploadService<S>
where
    S: ObjectStage,
{
    pub fn new(stage: Arc<S>) -> Self {
        Self { stage }
    }

    /// Generates a fresh storage key and a presigned PUT URL scoped to it.
    ///
    /// A new key is generated on every call, so repeated calls are safe:
    /// each produces an independent valid ticket and keys are never reused.
    pub async fn issue_ticket(&self) -> Result<UploadTicket, PipelineError> {
        let storage_key = StorageKey::fresh();

        let write_url = self
            .stage
            .issue_write_url(&storage_key, UPLOAD_CONTENT_TYPE, UPLOAD_URL_TTL)
            .await
            .map_err(|e: ObjectStageError| PipelineError::Infrastructure(e.to_string()))?;

        tracing::info!(key = %storage_key, "Issued upload ticket");

        Ok(UploadTicket {
            storage_key,
            write_url,
            expires_at: SystemTime::now() + UPLOAD_URL_TTL,
        })
    }
}
