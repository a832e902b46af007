use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::ports::{CompletionClient, ObjectStage, TranscriptionEngine};
use crate::domain::AudioSource;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::handlers::error::error_response;
use crate::presentation::state::AppState;

/// Legacy monolithic request: audio in (by key or inline base64), finished
/// document out.
#[derive(Deserialize)]
pub struct ProcessAudioRequest {
    pub file_key: Option<String>,
    pub audio_base64: Option<String>,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub openai_key: String,
}

/// Kept for older clients; strictly a composition of the transcription and
/// composition services.
#[tracing::instrument(skip(state, request))]
pub async fn process_audio_handler<S, T, C>(
    State(state): State<AppState<S, T, C>>,
    Json(request): Json<ProcessAudioRequest>,
) -> impl IntoResponse
where
    S: ObjectStage + 'static,
    T: TranscriptionEngine + 'static,
    C: CompletionClient + 'static,
{
    tracing::debug!(prompt = %sanitize_prompt(&request.prompt), "Processing combined audio request");

    let source = AudioSource::from_parts(request.file_key, request.audio_base64);

    let raw_text = match state
        .transcription_service
        .transcribe(source, &request.openai_key)
        .await
    {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Transcription failed");
            return error_response(&e);
        }
    };

    match state
        .composition_service
        .compose(&raw_text, &request.prompt, &request.openai_key)
        .await
    {
        Ok(document) => (StatusCode::OK, Json(document)).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Composition failed");
            error_response(&e)
        }
    }
}
