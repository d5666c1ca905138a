//! Configuration for the search host: lookup endpoint and log output.

mod loader;
mod types;

pub use loader::{ConfigError, API_KEY_ENV, LOG_PATH_ENV};
pub use types::{Config, LoggingConfig, OmdbConfig};
