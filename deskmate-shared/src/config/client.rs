use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[cfg(not(target_arch = "wasm32"))]
use std::{env, fs, path::PathBuf};

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const ENV_API_URL: &str = "DESKMATE_API_URL";
pub const ENV_ACCESS_TOKEN: &str = "DESKMATE_ACCESS_TOKEN";
pub const ENV_LOG_LEVEL: &str = "DESKMATE_LOG_LEVEL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unsupported configuration format `{0}`; use toml, json or yaml")]
    UnsupportedFormat(String),
    #[error("failed to parse configuration: {0}")]
    Parse(String),
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Settings for talking to the support API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the support API, e.g. `https://support.example.com/api`
    pub api_url: String,

    /// Bearer token issued by the auth provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Logging level used when `RUST_LOG` is unset
    pub log_level: String,

    /// Per-request timeout (native targets only)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Values given on the command line; they win over every other source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub access_token: Option<String>,
    pub log_level: Option<String>,
}

impl ClientConfig {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Configuration pointing at `api_url` with everything else defaulted.
    pub fn for_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::with_defaults()
        }
    }

    /// Loads the configuration: defaults, then the file at `config_path`,
    /// then `DESKMATE_*` environment variables, then `overrides`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if the
    /// resolved configuration fails [`ClientConfig::validate`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_config(
        config_path: Option<PathBuf>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => Self::with_defaults(),
        };

        if let Ok(api_url) = env::var(ENV_API_URL) {
            config.api_url = api_url;
        }
        if let Ok(token) = env::var(ENV_ACCESS_TOKEN) {
            config.access_token = Some(token);
        }
        if let Ok(log_level) = env::var(ENV_LOG_LEVEL) {
            config.log_level = log_level;
        }

        if let Some(api_url) = &overrides.api_url {
            config.api_url.clone_from(api_url);
        }
        if let Some(token) = &overrides.access_token {
            config.access_token = Some(token.clone());
        }
        if let Some(log_level) = &overrides.log_level {
            config.log_level.clone_from(log_level);
        }

        config.access_token = config
            .access_token
            .filter(|token| !token.trim().is_empty());

        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&content).map_err(parse_error),
            Some("json") => serde_json::from_str(&content).map_err(parse_error),
            Some("yaml" | "yml") => serde_yml::from_str(&content).map_err(parse_error),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    /// Renders the configuration in `format` (`toml`, `json` or `yaml`).
    ///
    /// # Errors
    /// Returns [`ConfigError`] for unknown formats or serialization failures.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn render(&self, format: &str) -> Result<String, ConfigError> {
        match format {
            "toml" => toml::to_string_pretty(self).map_err(parse_error),
            "json" => serde_json::to_string_pretty(self).map_err(parse_error),
            "yaml" | "yml" => serde_yml::to_string(self).map_err(parse_error),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Checks the resolved values.
    ///
    /// Relative URLs such as `/api` are accepted; they are resolved against
    /// the page origin in the browser.
    ///
    /// # Errors
    /// Returns every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let api_url = self.api_url.trim();
        if api_url.is_empty() {
            errors.push("API URL must not be empty".to_string());
        } else if !api_url.starts_with('/') && Url::parse(api_url).is_err() {
            errors.push(format!("API URL is not a valid URL: {api_url}"));
        }

        if self.timeout_secs == 0 {
            errors.push("Request timeout must be greater than 0 seconds".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::needless_pass_by_value)]
fn parse_error(err: impl std::fmt::Display) -> ConfigError {
    ConfigError::Parse(err.to_string())
}
