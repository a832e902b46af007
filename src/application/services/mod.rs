mod composition_service;
mod pipeline_error;
mod response_sanitizer;
mod scratch_file;
mod transcription_service;
mod upload_service;

pub use composition_service::CompositionService;
pub use pipeline_error::PipelineError;
pub use response_sanitizer::sanitize_completion;
pub use scratch_file::ScratchFile;
pub use transcription_service::TranscriptionService;
pub use upload_service::{UPLOAD_CONTENT_TYPE, UPLOAD_URL_TTL, UploadService};
