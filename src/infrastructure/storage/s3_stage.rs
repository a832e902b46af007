use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;

use crate::application::ports::{ObjectStage, ObjectStageError};
use crate::domain::StorageKey;

/// Object stage backed by an S3 bucket. Write access is handed to clients
/// as presigned PUT URLs; reads use the server's own credentials.
pub struct S3ObjectStage {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ObjectStage {
    pub fn new(client: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    /// Builds a stage from the ambient AWS environment (credentials chain,
    /// region) and the configured bucket name.
    pub async fn from_env(bucket: String) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_s3::Client::new(&config), bucket)
    }
}

#[async_trait]
impl ObjectStage for S3ObjectStage {
    async fn issue_write_url(
        &self,
        key: &StorageKey,
        content_type: &str,
        ttl: Duration,
    ) -> Result<String, ObjectStageError> {
        let presigning = PresigningConfig::expires_in(ttl)
            .map_err(|e| ObjectStageError::SignFailed(e.to_string()))?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .content_type(content_type)
            .presigned(presigning)
            .await
            .map_err(|e| ObjectStageError::SignFailed(e.to_string()))?;

        Ok(presigned.uri().to_string())
    }

    async fn fetch(&self, key: &StorageKey) -> Result<Vec<u8>, ObjectStageError> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_no_such_key() {
                    ObjectStageError::NotFound(key.to_string())
                } else {
                    ObjectStageError::DownloadFailed(service_error.to_string())
                }
            })?;

        let bytes = object
            .body
            .collect()
            .await
            .map_err(|e| ObjectStageError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
