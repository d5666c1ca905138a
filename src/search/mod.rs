//! Movie search screen.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `event.rs` - Intents raised by the view
//! - `usecase.rs` - One handler per event kind
//! - `router.rs` - Event → handler dispatch
//! - `result.rs` - Handler outcomes
//! - `reducer.rs` - State transitions
//! - `effect.rs` - One-shot effects
//! - `feed.rs` - Replaying state feed and effect bus
//! - `orchestrator.rs` - Pipeline wiring and lifetime

mod effect;
mod error;
mod event;
mod feed;
mod orchestrator;
mod reducer;
mod result;
mod router;
mod state;
mod usecase;

pub use effect::{effect_for, MovieViewEffect};
pub use error::{PipelineError, ReduceError};
pub use event::MovieEvent;
pub use feed::{EffectBus, StateFeed, Subscription};
pub use orchestrator::MovieSearchVm;
pub use reducer::SearchReducer;
pub use result::MovieResult;
pub use router::EventRouter;
pub use state::{ViewState, SEARCHING_TITLE};
pub use usecase::{
    on_add_to_history, on_restore_from_history, on_screen_load, SearchCompletion,
    SearchMovieUseCase,
};
