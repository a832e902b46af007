use async_trait::async_trait;

/// Text-generation provider invoked in JSON mode: the reply is constrained
/// to be a syntactically valid JSON object (though providers have been seen
/// wrapping it in a markdown fence anyway).
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        api_key: &str,
    ) -> Result<String, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
