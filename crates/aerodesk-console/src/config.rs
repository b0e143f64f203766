//! Console configuration loading from file and environment variables.

use aerodesk_client::BackendConfig;
use serde::Deserialize;
use thiserror::Error;

/// Top-level console configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Backend location and request timeout.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "aerodesk_records=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configured backend URL is unusable.
    #[error("{0}")]
    InvalidBaseUrl(String),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `AERODESK_API_URL` overrides `backend.base_url`
/// - `AERODESK_TIMEOUT_SECONDS` overrides `backend.timeout_seconds`
/// - `AERODESK_LOG_LEVEL` overrides `logging.level`
/// - `AERODESK_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed, or
/// if the resulting backend URL is not a valid `http`/`https` URL.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// [`load_config`] with an explicit environment lookup.
pub fn load_config_with(
    path: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    if let Some(url) = env("AERODESK_API_URL") {
        config.backend.base_url = url;
    }
    if let Some(timeout) = env("AERODESK_TIMEOUT_SECONDS") {
        if let Ok(parsed) = timeout.trim().parse() {
            config.backend.timeout_seconds = parsed;
        }
    }
    if let Some(level) = env("AERODESK_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = env("AERODESK_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    config
        .backend
        .parsed_base_url()
        .map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;

    Ok(config)
}
