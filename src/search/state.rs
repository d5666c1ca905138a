//! View state of the search screen.

use crate::movie::MovieSearchResult;
use crate::mvi::UiState;

/// Title shown while a lookup is in flight.
pub const SEARCHING_TITLE: &str = "Searching Movie...";

/// Everything the search screen renders. Replaced wholesale on every
/// reduction, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Text to put in the search box; `None` leaves the box untouched.
    pub search_box_text: Option<String>,
    pub movie_title: String,
    pub movie_poster_url: Option<String>,
    pub genres: String,
    pub plot: String,
    pub rating1: String,
    /// The movie currently on screen, used by "add to history".
    pub searched_movie_reference: Option<MovieSearchResult>,
    /// History list, in insertion order, without value duplicates.
    pub adapter_list: Vec<MovieSearchResult>,
}

impl UiState for ViewState {}

impl ViewState {
    /// True while the screen shows the in-flight search placeholder.
    pub fn is_searching(&self) -> bool {
        self.movie_title == SEARCHING_TITLE && self.searched_movie_reference.is_none()
    }

    /// True if `movie` is already in the history list.
    pub fn has_in_history(&self, movie: &MovieSearchResult) -> bool {
        self.adapter_list.contains(movie)
    }
}
