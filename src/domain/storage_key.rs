use std::fmt;

use uuid::Uuid;

/// Logical prefix under which all raw recordings live in the object stage.
pub const RAW_AUDIO_PREFIX: &str = "raw_audio";

/// File extension the mobile client records in (AAC in an MPEG-4 container).
pub const AUDIO_EXTENSION: &str = "m4a";

/// Key of a staged audio object, e.g. `raw_audio/9f4c…-….m4a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey(String);

impl StorageKey {
    /// Generates a collision-resistant key for a new recording.
    pub fn fresh() -> Self {
        Self(format!(
            "{}/{}.{}",
            RAW_AUDIO_PREFIX,
            Uuid::new_v4(),
            AUDIO_EXTENSION
        ))
    }

    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
