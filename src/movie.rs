//! The movie payload returned by lookups and kept in the search history.

use serde::{Deserialize, Serialize};

/// One movie lookup outcome.
///
/// The pipeline treats this as an opaque value: it is compared by value
/// (history de-duplication, distinct state emission) and only a handful of
/// fields are copied into the view state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MovieSearchResult {
    pub title: String,
    pub poster_url: String,
    pub genres: String,
    pub plot: String,
    pub rating_summary: String,
    /// Whether the lookup found a movie.
    pub result: bool,
    /// Domain failure reported by the lookup (e.g. "Movie not found!").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl MovieSearchResult {
    /// A result that carries only a failure description.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            result: false,
            error_message: Some(message.into()),
            ..Self::default()
        }
    }

    /// The failure description, if it is present and not blank.
    pub fn error(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }
}
