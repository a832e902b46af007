use std::sync::Arc;

use crate::application::ports::CompletionClient;
use crate::application::services::{PipelineError, sanitize_completion};
use crate::domain::StructuredDocument;

/// Transformation stage: turns a raw transcript plus a caller-supplied
/// editing instruction into a title + HTML document via the generation
/// provider's JSON mode.
pub struct CompositionService<C>
where
    C: CompletionClient,
{
    client: Arc<C>,
}

impl<C> CompositionService<C>
where
    C: CompletionClient,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn compose(
        &self,
        raw_text: &str,
        prompt: &str,
        api_key: &str,
    ) -> Result<StructuredDocument, PipelineError> {
        if api_key.is_empty() {
            return Err(PipelineError::BadRequest(
                "OpenAI key is missing".to_string(),
            ));
        }

        let system = format!(
            "You are a professional editor. {}. Return the result strictly as a valid JSON \
             object with two keys: 'title' (string) and 'content' (string containing HTML). \
             Do not add any markdown formatting.",
            prompt
        );
        let user = format!("Here is the raw transcript: {}", raw_text);

        let reply = self
            .client
            .complete(&system, &user, api_key)
            .await
            .map_err(|e| PipelineError::Upstream(e.to_string()))?;

        let sanitized = sanitize_completion(&reply);

        let document: StructuredDocument = serde_json::from_str(&sanitized)
            .map_err(|e| PipelineError::MalformedResponse(e.to_string()))?;

        tracing::info!(title_chars = document.title.len(), "Document composed");

        Ok(document)
    }
}
