//! The search screen's pipeline owner.
//!
//! ```text
//!  process_input ──→ intake ──┐
//!                             ├──→ EventRouter ──→ Lce<MovieResult> ──┬──→ SearchReducer ──→ StateFeed
//!  lookup tasks ──→ completions┘                                       └──→ effect_for ─────→ EffectBus
//! ```
//!
//! A single task runs routing, reduction and effect filtering, one result
//! at a time. Lookups run on their own tasks and report back through the
//! completions channel.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::lookup::MovieLookup;
use crate::mvi::Reducer;
use crate::shutdown::ShutdownHandle;

use super::effect::{effect_for, MovieViewEffect};
use super::error::PipelineError;
use super::event::MovieEvent;
use super::feed::{EffectBus, StateFeed, Subscription};
use super::reducer::SearchReducer;
use super::router::EventRouter;
use super::state::ViewState;
use super::usecase::SearchCompletion;

/// State holder for one search screen session.
///
/// Created per session; [`dispose`](Self::dispose) (or dropping it) stops
/// the pipeline and aborts any lookup in flight.
pub struct MovieSearchVm {
    intake: mpsc::UnboundedSender<MovieEvent>,
    states: Arc<StateFeed<ViewState>>,
    effects: Arc<EffectBus<MovieViewEffect>>,
    shutdown: ShutdownHandle,
    fault: Arc<Mutex<Option<PipelineError>>>,
    pipeline: Mutex<Option<JoinHandle<()>>>,
}

impl MovieSearchVm {
    /// Wires the pipeline and starts it. Must be called from within a tokio
    /// runtime.
    pub fn new(lookup: Arc<dyn MovieLookup>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self::start(lookup, completions_tx, completions_rx)
    }

    fn start(
        lookup: Arc<dyn MovieLookup>,
        completions_tx: mpsc::UnboundedSender<SearchCompletion>,
        completions_rx: mpsc::UnboundedReceiver<SearchCompletion>,
    ) -> Self {
        let (intake_tx, intake_rx) = mpsc::unbounded_channel();

        let states = Arc::new(StateFeed::new(ViewState::default()));
        let effects = Arc::new(EffectBus::new());
        let shutdown = ShutdownHandle::new();
        let fault = Arc::new(Mutex::new(None));

        let pipeline = Pipeline {
            router: EventRouter::new(lookup, completions_tx),
            intake: intake_rx,
            completions: completions_rx,
            states: Arc::clone(&states),
            effects: Arc::clone(&effects),
            shutdown: shutdown.clone(),
        };
        let task = tokio::spawn(pipeline.run(Arc::clone(&fault)));

        tracing::info!("Search pipeline started");

        Self {
            intake: intake_tx,
            states,
            effects,
            shutdown,
            fault,
            pipeline: Mutex::new(Some(task)),
        }
    }

    /// Queues `event` for the pipeline. Never blocks; events sent after
    /// disposal are dropped.
    pub fn process_input(&self, event: MovieEvent) {
        if self.shutdown.is_shutting_down() {
            tracing::debug!(kind = event.kind(), "Dropping event after dispose");
            return;
        }
        if let Err(err) = self.intake.send(event) {
            tracing::debug!(kind = err.0.kind(), "Dropping event, pipeline stopped");
        }
    }

    /// Subscribes to view states, starting with the latest one.
    pub fn states(&self) -> Subscription<ViewState> {
        self.states.subscribe()
    }

    /// The latest published view state.
    pub fn current_state(&self) -> ViewState {
        self.states.latest()
    }

    /// Subscribes to effects emitted from now on.
    pub fn effects(&self) -> Subscription<MovieViewEffect> {
        self.effects.subscribe()
    }

    /// The fault that stopped the pipeline, if any.
    pub fn fault(&self) -> Option<PipelineError> {
        self.fault.lock().clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.shutdown.is_shutting_down()
    }

    /// Stops the pipeline and cancels in-flight lookups. Idempotent.
    pub fn dispose(&self) {
        if self.shutdown.signal() {
            tracing::info!("Search pipeline disposing");
        }
    }

    /// Disposes and waits for the pipeline to finish.
    ///
    /// Returns the fault that stopped the pipeline, if it did not stop
    /// because of the dispose.
    pub async fn shutdown(&self) -> Result<(), PipelineError> {
        self.dispose();

        let task = self.pipeline.lock().take();
        if let Some(task) = task {
            if let Err(err) = task.await {
                tracing::error!(error = %err, "Search pipeline task failed");
            }
        }

        match self.fault() {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }
}

impl Drop for MovieSearchVm {
    fn drop(&mut self) {
        self.dispose();
    }
}

struct Pipeline {
    router: EventRouter,
    intake: mpsc::UnboundedReceiver<MovieEvent>,
    completions: mpsc::UnboundedReceiver<SearchCompletion>,
    states: Arc<StateFeed<ViewState>>,
    effects: Arc<EffectBus<MovieViewEffect>>,
    shutdown: ShutdownHandle,
}

impl Pipeline {
    async fn run(mut self, fault: Arc<Mutex<Option<PipelineError>>>) {
        let states = Arc::clone(&self.states);
        let effects = Arc::clone(&self.effects);

        if let Err(err) = self.drive().await {
            tracing::error!(error = %err, "Search pipeline stopped on fatal fault");
            *fault.lock() = Some(err);
        }

        // Drops the router, which aborts any lookup still running.
        drop(self);
        states.close();
        effects.close();
        tracing::info!("Search pipeline stopped");
    }

    async fn drive(&mut self) -> Result<(), PipelineError> {
        let mut state = self.states.latest();

        loop {
            let result = tokio::select! {
                biased;

                _ = self.shutdown.wait() => break,

                Some(completion) = self.completions.recv() => {
                    match self.router.complete_search(completion)? {
                        Some(result) => result,
                        None => continue,
                    }
                }

                event = self.intake.recv() => match event {
                    Some(event) => self.router.route(event)?,
                    None => break,
                },
            };

            let effect = effect_for(&result);

            state = SearchReducer::reduce(state, result)?;
            self.states.publish(state.clone());

            if let Some(effect) = effect {
                let delivered = self.effects.emit(effect);
                tracing::debug!(?effect, delivered, "Emitted view effect");
            }
        }

        self.router.cancel();
        Ok(())
    }
}
