use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub providers: ProviderSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub bucket: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub openai_base_url: String,
    pub whisper_model: String,
    pub chat_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Loads settings from the process environment. Only the bucket name is
    /// mandatory; everything else has a sensible default.
    pub fn from_env() -> Result<Self, String> {
        let bucket = std::env::var("AWS_BUCKET_NAME")
            .map_err(|_| "AWS_BUCKET_NAME must be set".to_string())?;

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Ok(Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
            },
            storage: StorageSettings { bucket },
            providers: ProviderSettings {
                openai_base_url: std::env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                whisper_model: std::env::var("WHISPER_MODEL")
                    .unwrap_or_else(|_| "whisper-1".to_string()),
                chat_model: std::env::var("CHAT_MODEL")
                    .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            },
            logging: LoggingSettings {
                level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                enable_json: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        })
    }
}
