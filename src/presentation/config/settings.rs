use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upload: UploadSettings,
    pub recognition: RecognitionSettings,
    pub generation: GenerationSettings,
    pub feedback: FeedbackSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layered load: `appsettings.<env>` file first, `APP_`-prefixed
    /// environment variables on top.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(" "),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionSettings {
    pub provider: RecognizerProviderSetting,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub language: Option<String>,
    /// Audio beyond this many seconds is dropped before recognition.
    pub max_audio_seconds: u32,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RecognizerProviderSetting {
    Remote,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub provider: GeneratorProviderSetting,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    /// Transcripts at or below this length are not summarized.
    pub min_summary_chars: usize,
    pub flashcard_style: FlashcardStyleSetting,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorProviderSetting {
    Remote,
    Heuristic,
    Mock,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FlashcardStyleSetting {
    Phrase,
    Oneword,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackSettings {
    pub log_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}
