use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::PipelineError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Maps the pipeline error taxonomy onto HTTP statuses. Client mistakes and
/// provider rejections are 400 so the mobile app renders a message; broken
/// infrastructure and unparseable provider output are 500.
pub fn error_response(error: &PipelineError) -> Response {
    let status = match error {
        PipelineError::BadRequest(_) | PipelineError::Upstream(_) => StatusCode::BAD_REQUEST,
        PipelineError::MalformedResponse(_) | PipelineError::Infrastructure(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
