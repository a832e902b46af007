mod error;
mod ping;
mod process_audio;
mod process_text;
mod transcribe;
mod upload_url;

pub use error::ErrorResponse;
pub use ping::ping_handler;
pub use process_audio::process_audio_handler;
pub use process_text::process_text_handler;
pub use transcribe::transcribe_handler;
pub use upload_url::upload_url_handler;
