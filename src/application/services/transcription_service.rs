use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::application::ports::{ObjectStage, ObjectStageError, TranscriptionEngine};
use crate::application::services::{PipelineError, ScratchFile};
use crate::domain::AudioSource;

/// Retrieval and transcription: materializes the request's audio into a
/// scratch file, submits it whole to the speech-to-text provider, and
/// returns the transcript verbatim. The scratch file is removed on every
/// exit path when it drops.
pub struct TranscriptionService<S, T>
where
    S: ObjectStage,
    T: TranscriptionEngine,
{
    stage: Arc<S>,
    engine: Arc<T>,
}

impl<S, T> TranscriptionService<S, T>
where
    S: ObjectStage,
    T: TranscriptionEngine,
{
    pub fn new(stage: Arc<S>, engine: Arc<T>) -> Self {
        Self { stage, engine }
    }

    pub async fn transcribe(
        &self,
        source: Option<AudioSource>,
        api_key: &str,
    ) -> Result<String, PipelineError> {
        if api_key.is_empty() {
            return Err(PipelineError::BadRequest(
                "OpenAI key is missing".to_string(),
            ));
        }

        let Some(source) = source else {
            return Err(PipelineError::BadRequest(
                "no audio source provided".to_string(),
            ));
        };

        let scratch = self.materialize(&source).await?;

        let audio = scratch
            .read()
            .map_err(|e| PipelineError::Infrastructure(format!("scratch read failed: {}", e)))?;

        let transcript = self
            .engine
            .transcribe(&audio, api_key)
            .await
            .map_err(|e| PipelineError::Upstream(e.to_string()))?;

        tracing::info!(chars = transcript.len(), "Transcription completed");

        Ok(transcript)
    }

    /// Stages the audio bytes into a uniquely named transient file.
    async fn materialize(&self, source: &AudioSource) -> Result<ScratchFile, PipelineError> {
        let bytes = match source {
            AudioSource::ByReference(key) => {
                tracing::debug!(key = %key, "Fetching staged audio");
                self.stage.fetch(key).await.map_err(|e| match e {
                    ObjectStageError::NotFound(msg) => {
                        PipelineError::Infrastructure(format!("audio object not found: {}", msg))
                    }
                    other => PipelineError::Infrastructure(other.to_string()),
                })?
            }
            AudioSource::Inline { base64 } => {
                // Some client transport layers wrap the payload in hard
                // line breaks; strip them before decoding.
                let cleaned: String = base64
                    .chars()
                    .filter(|c| *c != '\n' && *c != '\r')
                    .collect();
                BASE64.decode(cleaned).map_err(|e| {
                    PipelineError::BadRequest(format!("base64 decode error: {}", e))
                })?
            }
        };

        tracing::debug!(bytes = bytes.len(), "Audio materialized");

        ScratchFile::create(&bytes)
            .map_err(|e| PipelineError::Infrastructure(format!("scratch write failed: {}", e)))
    }
}
