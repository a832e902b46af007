use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{CompletionClient, ObjectStage, TranscriptionEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    ping_handler, process_audio_handler, process_text_handler, transcribe_handler,
    upload_url_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<S, T, C>(state: AppState<S, T, C>) -> Router
where
    S: ObjectStage + 'static,
    T: TranscriptionEngine + 'static,
    C: CompletionClient + 'static,
{
    // The mobile client calls cross-origin; the API carries no cookies or
    // server-held credentials, so the policy is wide open.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/ping", get(ping_handler))
        .route("/get_upload_url", get(upload_url_handler::<S, T, C>))
        .route("/transcribe", post(transcribe_handler::<S, T, C>))
        .route("/process-text", post(process_text_handler::<S, T, C>))
        .route("/process-audio", post(process_audio_handler::<S, T, C>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
