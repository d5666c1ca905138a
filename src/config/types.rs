use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// OMDb lookup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OmdbConfig {
    /// Base URL of the OMDb API (default: "https://www.omdbapi.com/").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key. Overridden by the `OMDB_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Diagnostic log output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file prefix. Logging is off when neither this nor
    /// `MOVIE_SEARCH_LOG` is set.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "https://www.omdbapi.com/".to_string()
}

fn default_timeout_seconds() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
