//! Routes each event to the handler for its kind.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::lce::{Lce, LceViolation};
use crate::lookup::MovieLookup;

use super::event::MovieEvent;
use super::result::MovieResult;
use super::usecase::{
    on_add_to_history, on_restore_from_history, on_screen_load, SearchCompletion,
    SearchMovieUseCase,
};

/// Demultiplexes events onto use-case handlers.
///
/// Every event goes to exactly one handler. The caller merges the returned
/// emissions with search completions into the unified result stream.
pub struct EventRouter {
    search: SearchMovieUseCase,
}

impl EventRouter {
    pub fn new(
        lookup: Arc<dyn MovieLookup>,
        completions: mpsc::UnboundedSender<SearchCompletion>,
    ) -> Self {
        Self {
            search: SearchMovieUseCase::new(lookup, completions),
        }
    }

    /// Dispatches `event` and returns the handler's immediate emission.
    pub fn route(&mut self, event: MovieEvent) -> Result<Lce<MovieResult>, LceViolation> {
        tracing::debug!(kind = event.kind(), "Routing event");

        match event {
            MovieEvent::ViewResume => Ok(on_screen_load()),
            MovieEvent::SearchMovie { title } => self.search.start(title),
            MovieEvent::AddToHistory { movie } => Ok(on_add_to_history(movie)),
            MovieEvent::RestoreFromHistory { movie } => Ok(on_restore_from_history(movie)),
        }
    }

    /// Hands a finished lookup to the search handler.
    pub fn complete_search(
        &mut self,
        completion: SearchCompletion,
    ) -> Result<Option<Lce<MovieResult>>, LceViolation> {
        self.search.complete(completion)
    }

    /// Aborts any in-flight asynchronous work.
    pub fn cancel(&mut self) {
        self.search.cancel();
    }
}
