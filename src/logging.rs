use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize tracing from the logging config.
///
/// Logging is off unless `config.file` is set (the `MOVIE_SEARCH_LOG`
/// override lands there too), so it never interleaves with the host's
/// stdout. `RUST_LOG` wins over `config.level`.
///
/// Returns the file actually written, which is `{file}.{timestamp}.{pid}`
/// so concurrent instances do not clobber each other.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let prefix = config.file.as_deref()?;
    let path = unique_log_path(prefix, std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(file_layer)
        .init();

    tracing::info!(path = %path.display(), level = %config.level, "Logging started");
    Some(path)
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

fn unique_log_path(prefix: &Path, pid: u32) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = prefix.as_os_str().to_owned();
    name.push(format!(".{timestamp}.{pid}"));
    PathBuf::from(name)
}
