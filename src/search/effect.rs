//! One-shot effects and the filter that derives them from results.

use crate::lce::Lce;
use crate::mvi::ViewEffect;

use super::result::MovieResult;

/// Fire-once signals for the search screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieViewEffect {
    /// Show the "added to history" toast.
    AddedToHistoryToast,
}

impl ViewEffect for MovieViewEffect {}

/// Projects one unified result onto an effect.
///
/// Only `Content(AddToHistory)` produces an effect, and it does so whether
/// or not the movie was already in the history.
pub fn effect_for(result: &Lce<MovieResult>) -> Option<MovieViewEffect> {
    match result {
        Lce::Content(MovieResult::AddToHistory { .. }) => {
            Some(MovieViewEffect::AddedToHistoryToast)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::MovieSearchResult;

    #[test]
    fn add_to_history_content_produces_toast() {
        let result = Lce::Content(MovieResult::AddToHistory {
            movie: MovieSearchResult::default(),
        });
        assert_eq!(
            effect_for(&result),
            Some(MovieViewEffect::AddedToHistoryToast)
        );
    }

    #[test]
    fn other_results_are_dropped() {
        let movie = MovieSearchResult::default();
        assert_eq!(effect_for(&Lce::Loading), None);
        assert_eq!(effect_for(&Lce::Content(MovieResult::ScreenLoad)), None);
        assert_eq!(
            effect_for(&Lce::Content(MovieResult::SearchMovie {
                movie: movie.clone()
            })),
            None
        );
        assert_eq!(
            effect_for(&Lce::Error(MovieResult::AddToHistory { movie })),
            None
        );
    }
}
