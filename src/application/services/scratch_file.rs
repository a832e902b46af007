use std::io::{self, Write};
use std::path::Path;

use crate::domain::AUDIO_EXTENSION;

/// Transient on-disk copy of one request's audio, owned exclusively by that
/// request's pipeline execution.
///
/// The name carries a random component so concurrent requests sharing a
/// scratch directory never collide. Deletion happens on drop for every exit
/// path; a failed delete is swallowed so it cannot mask the original
/// outcome.
pub struct ScratchFile {
    inner: tempfile::NamedTempFile,
}

impl ScratchFile {
    /// Writes `data` into a freshly named file in the system temp directory.
    pub fn create(data: &[u8]) -> io::Result<Self> {
        let mut inner = tempfile::Builder::new()
            .prefix("audio_")
            .suffix(&format!(".{}", AUDIO_EXTENSION))
            .tempfile()?;
        inner.write_all(data)?;
        inner.flush()?;
        Ok(Self { inner })
    }

    pub fn read(&self) -> io::Result<Vec<u8>> {
        std::fs::read(self.path())
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }
}
