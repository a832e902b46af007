use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{CompletionClient, ObjectStage, TranscriptionEngine};
use crate::presentation::handlers::error::error_response;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadUrlResponse {
    pub upload_url: String,
    pub file_key: String,
}

/// Hands the client a presigned PUT URL so the recording bypasses this
/// server on its way to the object stage.
#[tracing::instrument(skip(state))]
pub async fn upload_url_handler<S, T, C>(State(state): State<AppState<S, T, C>>) -> impl IntoResponse
where
    S: ObjectStage + 'static,
    T: TranscriptionEngine + 'static,
    C: CompletionClient + 'static,
{
    match state.upload_service.issue_ticket().await {
        Ok(ticket) => (
            StatusCode::OK,
            Json(UploadUrlResponse {
                upload_url: ticket.write_url,
                file_key: ticket.storage_key.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Upload ticket issuance failed");
            error_response(&e)
        }
    }
}
