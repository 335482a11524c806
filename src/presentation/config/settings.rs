use config::{Config, Environment as EnvironmentSource, File};
use serde::Deserialize;

use crate::application::ports::StrategyKind;
use crate::application::services::{DEFAULT_ATTEMPT_TIMEOUT, DEFAULT_MAX_UPLOAD_BYTES};
use crate::domain::{CharacterFilter, DEFAULT_OCR_LANGUAGES, OcrLanguageProfile};
use crate::infrastructure::text_processing::{DEFAULT_TESSERACT_CMD, PDF_STRATEGY_ORDER};

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub extraction: ExtractionSettings,
}

impl Settings {
    /// Layers `appsettings.{environment}` and `APP_*` variables over the defaults.
    ///
    /// Nested keys use `__`, e.g. `APP_EXTRACTION__IMAGE__LANGUAGES=en,hi`.
    pub fn load(environment: Environment) -> anyhow::Result<Self> {
        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str()))
                    .required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("extraction.pdf.strategies")
                    .with_list_parse_key("extraction.image.languages")
                    .try_parsing(true),
            )
            .build()?;

        Ok(configuration.try_deserialize()?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,anuvadakah=debug,tower_http=debug".to_string(),
            enable_json: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub max_upload_bytes: u64,
    pub attempt_timeout_secs: u64,
    pub pdf: PdfExtractionSettings,
    pub image: ImageExtractionSettings,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            attempt_timeout_secs: DEFAULT_ATTEMPT_TIMEOUT.as_secs(),
            pdf: PdfExtractionSettings::default(),
            image: ImageExtractionSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PdfExtractionSettings {
    pub strategies: Vec<StrategyKind>,
    pub character_filter: CharacterFilter,
}

impl Default for PdfExtractionSettings {
    fn default() -> Self {
        Self {
            strategies: PDF_STRATEGY_ORDER.to_vec(),
            character_filter: CharacterFilter::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImageExtractionSettings {
    pub enabled: bool,
    pub tesseract_cmd: String,
    pub languages: Vec<String>,
    pub character_filter: CharacterFilter,
}

impl ImageExtractionSettings {
    /// An empty language list means the built-in default set.
    pub fn ocr_profile(&self) -> OcrLanguageProfile {
        if self.languages.is_empty() {
            OcrLanguageProfile::default()
        } else {
            OcrLanguageProfile::from_codes(&self.languages)
        }
    }
}

impl Default for ImageExtractionSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            tesseract_cmd: DEFAULT_TESSERACT_CMD.to_string(),
            languages: DEFAULT_OCR_LANGUAGES
                .iter()
                .map(|code| code.to_string())
                .collect(),
            character_filter: CharacterFilter::default(),
        }
    }
}
