//! Use-case handlers, one per event kind.
//!
//! Synchronous handlers turn their event straight into a `Content` result.
//! The search handler emits `Loading` right away and runs the lookup on a
//! background task whose completion comes back through a channel, tagged
//! with the generation that started it. Only the latest generation is ever
//! accepted.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::lce::{Lce, LceTracker, LceViolation};
use crate::lookup::MovieLookup;
use crate::movie::MovieSearchResult;

use super::result::MovieResult;

/// `ViewResume` → `Content(ScreenLoad)`.
pub fn on_screen_load() -> Lce<MovieResult> {
    Lce::Content(MovieResult::ScreenLoad)
}

/// `AddToHistory(movie)` → `Content(AddToHistory(movie))`.
pub fn on_add_to_history(movie: MovieSearchResult) -> Lce<MovieResult> {
    Lce::Content(MovieResult::AddToHistory { movie })
}

/// `RestoreFromHistory(movie)` → `Content(SearchMovie(movie))`, exactly as
/// if a search had just found it.
pub fn on_restore_from_history(movie: MovieSearchResult) -> Lce<MovieResult> {
    Lce::Content(MovieResult::SearchMovie { movie })
}

/// Terminal outcome of one background lookup.
#[derive(Debug)]
pub struct SearchCompletion {
    generation: u64,
    result: Lce<MovieResult>,
}

#[cfg(test)]
impl SearchCompletion {
    pub(crate) fn new(generation: u64, result: Lce<MovieResult>) -> Self {
        Self { generation, result }
    }
}

/// Search handler with latest-wins semantics.
pub struct SearchMovieUseCase {
    lookup: Arc<dyn MovieLookup>,
    completions: mpsc::UnboundedSender<SearchCompletion>,
    generation: u64,
    in_flight: Option<AbortHandle>,
    tracker: LceTracker,
}

impl SearchMovieUseCase {
    pub fn new(
        lookup: Arc<dyn MovieLookup>,
        completions: mpsc::UnboundedSender<SearchCompletion>,
    ) -> Self {
        Self {
            lookup,
            completions,
            generation: 0,
            in_flight: None,
            tracker: LceTracker::new(),
        }
    }

    /// Starts a lookup for `title`, aborting the one in flight.
    ///
    /// Returns the `Loading` emission; the terminal emission arrives later
    /// as a [`SearchCompletion`]. Must be called from within a tokio runtime.
    pub fn start(&mut self, title: String) -> Result<Lce<MovieResult>, LceViolation> {
        self.cancel();

        self.generation += 1;
        self.tracker = LceTracker::new();
        let loading = Lce::Loading;
        self.tracker.observe(&loading)?;

        let generation = self.generation;
        let lookup = Arc::clone(&self.lookup);
        let completions = self.completions.clone();

        tracing::debug!(
            generation,
            title = %title,
            lookup = lookup.name(),
            "Starting movie lookup"
        );

        let task = tokio::spawn(async move {
            let result = search(lookup.as_ref(), &title).await;
            // The pipeline is gone if this fails; nothing left to notify.
            let _ = completions.send(SearchCompletion { generation, result });
        });
        self.in_flight = Some(task.abort_handle());

        Ok(loading)
    }

    /// Accepts a finished lookup.
    ///
    /// Returns `None` for completions of superseded searches.
    pub fn complete(
        &mut self,
        completion: SearchCompletion,
    ) -> Result<Option<Lce<MovieResult>>, LceViolation> {
        if completion.generation != self.generation {
            tracing::debug!(
                stale = completion.generation,
                current = self.generation,
                "Discarding superseded lookup result"
            );
            return Ok(None);
        }

        self.tracker.observe(&completion.result)?;
        self.in_flight = None;
        Ok(Some(completion.result))
    }

    /// Aborts the in-flight lookup, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
            tracing::debug!(generation = self.generation, "Cancelled in-flight lookup");
        }
    }
}

impl Drop for SearchMovieUseCase {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runs one lookup and wraps its outcome.
///
/// Transport failures are converted into an error result carrying the
/// failure description, so they never reach the merged stream as faults.
async fn search(lookup: &dyn MovieLookup, title: &str) -> Lce<MovieResult> {
    match lookup.lookup(title).await {
        Ok(movie) if movie.error().is_none() => Lce::Content(MovieResult::SearchMovie { movie }),
        Ok(movie) => {
            tracing::debug!(title = %title, error = ?movie.error_message, "Lookup reported no match");
            Lce::Error(MovieResult::SearchMovie { movie })
        }
        Err(err) => {
            tracing::warn!(title = %title, error = %err, "Lookup failed");
            Lce::Error(MovieResult::SearchMovie {
                movie: MovieSearchResult::failed(err.to_string()),
            })
        }
    }
}
