mod audio_source;
mod storage_key;
mod structured_document;
mod upload_ticket;

pub use audio_source::AudioSource;
pub use storage_key::{AUDIO_EXTENSION, RAW_AUDIO_PREFIX, StorageKey};
pub use structured_document::StructuredDocument;
pub use upload_ticket::UploadTicket;
