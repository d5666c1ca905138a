use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable that overrides the configured OMDb API key.
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

/// Environment variable that overrides the configured log file.
pub const LOG_PATH_ENV: &str = "MOVIE_SEARCH_LOG";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/movie-search/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("movie-search").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Applies the `OMDB_API_KEY` and `MOVIE_SEARCH_LOG` environment
    /// overrides, if set and non-empty.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(file) = std::env::var(LOG_PATH_ENV).ok().filter(|p| !p.trim().is_empty()) {
            self.logging.file = Some(PathBuf::from(file));
        }
        let key = std::env::var(API_KEY_ENV).ok();
        self.with_api_key_override(key)
    }

    /// Replaces the API key when `key` is present and non-empty.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.omdb.api_key = Some(key);
        }
        self
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The OMDb base URL is not empty
    /// - The request timeout is positive
    /// - The log level names a tracing level
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.omdb.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "omdb.base_url must not be empty".to_string(),
            });
        }

        if self.omdb.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "omdb.timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "logging.level must be one of trace, debug, info, warn, error (got '{}')",
                    self.logging.level
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn api_key_override_ignores_blank_values() {
        let config = Config::default().with_api_key_override(Some(" ".into()));
        assert_eq!(config.omdb.api_key, None);

        let config = Config::default().with_api_key_override(Some("abc".into()));
        assert_eq!(config.omdb.api_key.as_deref(), Some("abc"));
    }

    #[test]
    fn log_level_is_validated() {
        let mut config = Config::default();
        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());

        config.logging.level = "loud".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
