//! Movie lookup collaborator.
//!
//! The search pipeline never talks to the network itself; it calls a
//! [`MovieLookup`] implementation on a background task and aborts that task
//! when a newer search supersedes it. Implementations must therefore be
//! safe to drop mid-request.

pub mod omdb;

use async_trait::async_trait;
use thiserror::Error;

use crate::movie::MovieSearchResult;

pub use omdb::OmdbLookup;

/// Transport-level lookup failures.
///
/// Domain failures ("movie not found") are not errors: they come back as a
/// [`MovieSearchResult`] with `error_message` set.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Lookup is not usable (e.g. missing API key).
    #[error("lookup not configured: {0}")]
    NotConfigured(String),

    /// Connection, DNS or timeout failure.
    #[error("lookup request failed: {0}")]
    Transport(String),

    /// Upstream answered with a non-success HTTP status.
    #[error("lookup returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Upstream body could not be decoded.
    #[error("lookup response could not be decoded: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Decode(err.to_string())
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

/// Finds a movie by title.
#[async_trait]
pub trait MovieLookup: Send + Sync {
    /// Returns the name of the lookup for logging.
    fn name(&self) -> &str;

    /// Looks up `title`.
    async fn lookup(&self, title: &str) -> Result<MovieSearchResult, LookupError>;
}
