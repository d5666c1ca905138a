//! Reducer for the search screen.

use crate::lce::Lce;
use crate::mvi::Reducer;

use super::error::ReduceError;
use super::result::MovieResult;
use super::state::{ViewState, SEARCHING_TITLE};

/// Folds unified `Lce<MovieResult>` emissions into [`ViewState`].
pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = ViewState;
    type Input = Lce<MovieResult>;
    type Error = ReduceError;

    fn reduce(state: Self::State, input: Self::Input) -> Result<Self::State, Self::Error> {
        match input {
            Lce::Loading => Ok(ViewState {
                search_box_text: None,
                movie_title: SEARCHING_TITLE.to_string(),
                movie_poster_url: Some(String::new()),
                rating1: String::new(),
                searched_movie_reference: None,
                ..state
            }),

            Lce::Content(MovieResult::ScreenLoad) => Ok(ViewState {
                search_box_text: Some(String::new()),
                ..state
            }),

            Lce::Content(MovieResult::SearchMovie { movie }) => Ok(ViewState {
                movie_title: movie.title.clone(),
                rating1: movie.rating_summary.clone(),
                movie_poster_url: Some(movie.poster_url.clone()),
                searched_movie_reference: Some(movie),
                ..state
            }),

            Lce::Content(MovieResult::AddToHistory { movie }) => {
                if state.has_in_history(&movie) {
                    return Ok(state);
                }
                let mut adapter_list = state.adapter_list;
                adapter_list.push(movie);
                Ok(ViewState {
                    adapter_list,
                    ..state
                })
            }

            Lce::Error(MovieResult::SearchMovie { movie }) => {
                let message = movie.error().ok_or(ReduceError::MissingErrorMessage)?;
                Ok(ViewState {
                    movie_title: message.to_string(),
                    ..state
                })
            }

            Lce::Error(other) => Err(ReduceError::UnexpectedErrorResult { kind: other.kind() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::MovieSearchResult;

    fn movie(title: &str) -> MovieSearchResult {
        MovieSearchResult {
            title: title.to_string(),
            poster_url: format!("https://img/{title}.jpg"),
            rating_summary: "IMDb: 8/10".to_string(),
            result: true,
            ..MovieSearchResult::default()
        }
    }

    #[test]
    fn loading_clears_search_fields_but_keeps_history() {
        let state = ViewState {
            search_box_text: Some("abc".into()),
            movie_title: "Old".into(),
            rating1: "5/10".into(),
            searched_movie_reference: Some(movie("Old")),
            adapter_list: vec![movie("Old")],
            ..ViewState::default()
        };

        let next = SearchReducer::reduce(state, Lce::Loading).unwrap();
        assert_eq!(next.movie_title, SEARCHING_TITLE);
        assert_eq!(next.rating1, "");
        assert_eq!(next.movie_poster_url.as_deref(), Some(""));
        assert_eq!(next.search_box_text, None);
        assert_eq!(next.searched_movie_reference, None);
        assert_eq!(next.adapter_list, vec![movie("Old")]);
        assert!(next.is_searching());
    }

    #[test]
    fn error_without_message_is_a_fault() {
        let result = SearchReducer::reduce(
            ViewState::default(),
            Lce::Error(MovieResult::SearchMovie {
                movie: movie("Blank"),
            }),
        );
        assert_eq!(result, Err(ReduceError::MissingErrorMessage));
    }

    #[test]
    fn add_to_history_is_idempotent_by_value() {
        let once = SearchReducer::reduce(
            ViewState::default(),
            Lce::Content(MovieResult::AddToHistory { movie: movie("A") }),
        )
        .unwrap();
        let twice = SearchReducer::reduce(
            once.clone(),
            Lce::Content(MovieResult::AddToHistory { movie: movie("A") }),
        )
        .unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.adapter_list.len(), 1);
    }
}
