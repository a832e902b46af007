mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{LoggingSettings, ProviderSettings, ServerSettings, Settings, StorageSettings};
