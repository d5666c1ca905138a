//! Outcomes produced by the use-case handlers.

use crate::movie::MovieSearchResult;

/// Results that the reducer and effect filter consume, always wrapped in an
/// [`Lce`](crate::lce::Lce).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieResult {
    /// The screen was (re)loaded.
    ScreenLoad,

    /// A movie to display, from a search or restored from history.
    SearchMovie { movie: MovieSearchResult },

    /// A movie to append to the history list.
    AddToHistory { movie: MovieSearchResult },
}

impl MovieResult {
    /// Short name used in log fields and fault messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ScreenLoad => "screen_load",
            Self::SearchMovie { .. } => "search_movie",
            Self::AddToHistory { .. } => "add_to_history",
        }
    }
}
