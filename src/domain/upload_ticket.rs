use std::time::SystemTime;

use super::StorageKey;

/// One-shot write credential for a direct client upload.
///
/// Issued fresh on every call and never persisted; the object stage expires
/// the underlying URL independently of this process.
#[derive(Debug, Clone)]
pub struct UploadTicket {
    pub storage_key: StorageKey,
    pub write_url: String,
    pub expires_at: SystemTime,
}
