use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    /// `LOG_FORMAT=json` wins over `logging.enable_json`.
    pub fn from_settings(logging: &LoggingSettings, environment: Environment) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: log_format_is_json().unwrap_or(logging.enable_json),
            default_filter: logging.level.clone(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::from_settings(&LoggingSettings::default(), Environment::default())
    }
}

fn log_format_is_json() -> Option<bool> {
    std::env::var("LOG_FORMAT")
        .ok()
        .map(|v| v.eq_ignore_ascii_case("json"))
}
