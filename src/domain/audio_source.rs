use super::StorageKey;

/// Where the audio bytes for a transcription request come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    /// A previously uploaded object in the stage area.
    ByReference(StorageKey),
    /// Base64-encoded bytes carried inline in the request (legacy clients).
    Inline { base64: String },
}

impl AudioSource {
    /// Builds a source from the optional request fields.
    ///
    /// A storage key takes precedence over an inline payload; `None` means
    /// the client supplied neither.
    pub fn from_parts(file_key: Option<String>, audio_base64: Option<String>) -> Option<Self> {
        if let Some(key) = file_key.filter(|k| !k.is_empty()) {
            return Some(Self::ByReference(StorageKey::from_raw(key)));
        }
        audio_base64
            .filter(|b| !b.is_empty())
            .map(|base64| Self::Inline { base64 })
    }
}
