//! Intents the search screen can raise.

use crate::movie::MovieSearchResult;
use crate::mvi::Intent;

/// Events that can be dispatched to the search pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieEvent {
    /// The screen became visible again.
    ViewResume,

    /// User submitted a title to search for.
    SearchMovie {
        /// Title as typed by the user.
        title: String,
    },

    /// User added the displayed movie to the history list.
    AddToHistory {
        movie: MovieSearchResult,
    },

    /// User picked a movie from the history list.
    RestoreFromHistory {
        movie: MovieSearchResult,
    },
}

impl Intent for MovieEvent {}

impl MovieEvent {
    /// Short name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ViewResume => "view_resume",
            Self::SearchMovie { .. } => "search_movie",
            Self::AddToHistory { .. } => "add_to_history",
            Self::RestoreFromHistory { .. } => "restore_from_history",
        }
    }
}
