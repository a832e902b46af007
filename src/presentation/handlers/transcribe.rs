use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CompletionClient, ObjectStage, TranscriptionEngine};
use crate::domain::AudioSource;
use crate::presentation::handlers::error::error_response;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct TranscribeRequest {
    #[serde(default)]
    pub file_key: String,
    #[serde(default)]
    pub openai_key: String,
}

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub raw_text: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn transcribe_handler<S, T, C>(
    State(state): State<AppState<S, T, C>>,
    Json(request): Json<TranscribeRequest>,
) -> impl IntoResponse
where
    S: ObjectStage + 'static,
    T: TranscriptionEngine + 'static,
    C: CompletionClient + 'static,
{
    tracing::debug!(file_key = %request.file_key, "Processing transcription request");

    let source = AudioSource::from_parts(Some(request.file_key), None);

    match state
        .transcription_service
        .transcribe(source, &request.openai_key)
        .await
    {
        Ok(raw_text) => (StatusCode::OK, Json(TranscribeResponse { raw_text })).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Transcription failed");
            error_response(&e)
        }
    }
}
