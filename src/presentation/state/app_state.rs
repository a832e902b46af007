use std::sync::Arc;

use crate::application::ports::{CompletionClient, ObjectStage, TranscriptionEngine};
use crate::application::services::{CompositionService, TranscriptionService, UploadService};
use crate::presentation::config::Settings;

pub struct AppState<S, T, C>
where
    S: ObjectStage,
    T: TranscriptionEngine,
    C: CompletionClient,
{
    pub upload_service: Arc<UploadService<S>>,
    pub transcription_service: Arc<TranscriptionService<S, T>>,
    pub composition_service: Arc<CompositionService<C>>,
    pub settings: Settings,
}

impl<S, T, C> Clone for AppState<S, T, C>
where
    S: ObjectStage,
    T: TranscriptionEngine,
    C: CompletionClient,
{
    fn clone(&self) -> Self {
        Self {
            upload_service: Arc::clone(&self.upload_service),
            transcription_service: Arc::clone(&self.transcription_service),
            composition_service: Arc::clone(&self.composition_service),
            settings: self.settings.clone(),
        }
    }
}
