mod completion_client;
mod object_stage;
mod transcription_engine;

pub use completion_client::{CompletionClient, CompletionError};
pub use object_stage::{ObjectStage, ObjectStageError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
