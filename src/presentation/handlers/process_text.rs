use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::ports::{CompletionClient, ObjectStage, TranscriptionEngine};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::error::error_response;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ProcessTextRequest {
    #[serde(default)]
    pub raw_text: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub openai_key: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn process_text_handler<S, T, C>(
    State(state): State<AppState<S, T, C>>,
    Json(request): Json<ProcessTextRequest>,
) -> impl IntoResponse
where
    S: ObjectStage + 'static,
    T: TranscriptionEngine + 'static,
    C: CompletionClient + 'static,
{
    tracing::debug!(prompt = %sanitize_prompt(&request.prompt), "Processing composition request");

    match state
        .composition_service
        .compose(&request.raw_text, &request.prompt, &request.openai_key)
        .await
    {
        Ok(document) => (StatusCode::OK, Json(document)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Composition failed");
            error_response(&e)
        }
    }
}
