use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use vocanote::application::services::{CompositionService, TranscriptionService, UploadService};
use vocanote::infrastructure::audio::OpenAiWhisperEngine;
use vocanote::infrastructure::llm::OpenAiCompletionClient;
use vocanote::infrastructure::observability::{TracingConfig, init_tracing};
use vocanote::infrastructure::storage::S3ObjectStage;
use vocanote::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().map_err(anyhow::Error::msg)?;

    init_tracing(
        TracingConfig {
            environment: Environment::from_env().to_string(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    let stage = Arc::new(S3ObjectStage::from_env(settings.storage.bucket.clone()).await);

    let whisper_engine = Arc::new(OpenAiWhisperEngine::new(
        settings.providers.openai_base_url.clone(),
        settings.providers.whisper_model.clone(),
    ));
    let completion_client = Arc::new(OpenAiCompletionClient::new(
        settings.providers.openai_base_url.clone(),
        settings.providers.chat_model.clone(),
    ));

    let upload_service = Arc::new(UploadService::new(Arc::clone(&stage)));
    let transcription_service = Arc::new(TranscriptionService::new(
        Arc::clone(&stage),
        whisper_engine,
    ));
    let composition_service = Arc::new(CompositionService::new(completion_client));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        upload_service,
        transcription_service,
        composition_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
