//! Shared test utilities and mock lookups.

#![allow(dead_code, unused_imports)]

pub mod mock_omdb;

use async_trait::async_trait;
use movie_search::lookup::{LookupError, MovieLookup};
use movie_search::movie::MovieSearchResult;
use movie_search::search::{MovieSearchVm, Subscription, ViewState};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

const WAIT: Duration = Duration::from_secs(2);

/// A movie that a lookup found.
pub fn movie(title: &str) -> MovieSearchResult {
    MovieSearchResult {
        title: title.to_string(),
        poster_url: format!("https://img.example/{}.jpg", title.to_lowercase()),
        genres: "Drama".to_string(),
        plot: format!("The story of {title}."),
        rating_summary: "Internet Movie Database: 7.5/10".to_string(),
        result: true,
        error_message: None,
    }
}

/// Scriptable lookup.
///
/// Titles without a scripted outcome resolve to [`movie`]. Gated titles
/// block until [`MockLookup::release`] is called for them.
#[derive(Default)]
pub struct MockLookup {
    outcomes: Mutex<HashMap<String, Result<MovieSearchResult, String>>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<Vec<String>>,
    abandoned: Arc<AtomicUsize>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome for `title`. `Err` simulates a transport failure.
    pub fn respond(self, title: &str, outcome: Result<MovieSearchResult, String>) -> Self {
        self.outcomes.lock().insert(title.to_string(), outcome);
        self
    }

    /// Hold lookups of `title` until released.
    pub fn gate(self, title: &str) -> Self {
        self.gates
            .lock()
            .insert(title.to_string(), Arc::new(Notify::new()));
        self
    }

    /// Let a gated lookup of `title` finish.
    pub fn release(&self, title: &str) {
        if let Some(gate) = self.gates.lock().get(title) {
            gate.notify_one();
        }
    }

    /// Titles looked up so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Lookups dropped before they finished.
    pub fn abandoned(&self) -> usize {
        self.abandoned.load(Ordering::SeqCst)
    }

    pub async fn wait_for_calls(&self, count: usize) {
        wait_until(|| self.calls.lock().len() >= count, "lookup calls").await;
    }

    pub async fn wait_for_abandoned(&self, count: usize) {
        wait_until(|| self.abandoned() >= count, "abandoned lookups").await;
    }
}

#[async_trait]
impl MovieLookup for MockLookup {
    fn name(&self) -> &str {
        "mock"
    }

    async fn lookup(&self, title: &str) -> Result<MovieSearchResult, LookupError> {
        self.calls.lock().push(title.to_string());

        let gate = self.gates.lock().get(title).cloned();
        if let Some(gate) = gate {
            let guard = AbandonGuard {
                abandoned: Arc::clone(&self.abandoned),
                armed: true,
            };
            gate.notified().await;
            guard.disarm();
        }

        let outcome = self.outcomes.lock().get(title).cloned();
        match outcome {
            Some(Ok(movie)) => Ok(movie),
            Some(Err(message)) => Err(LookupError::Transport(message)),
            None => Ok(movie(title)),
        }
    }
}

/// Counts a lookup as abandoned if it is dropped while still waiting.
struct AbandonGuard {
    abandoned: Arc<AtomicUsize>,
    armed: bool,
}

impl AbandonGuard {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for AbandonGuard {
    fn drop(&mut self) {
        if self.armed {
            self.abandoned.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Start a view model on `lookup`.
pub fn start_vm(lookup: Arc<MockLookup>) -> MovieSearchVm {
    MovieSearchVm::new(lookup)
}

/// Next value from `sub`, failing the test if none arrives in time.
pub async fn next<T: Clone>(sub: &mut Subscription<T>) -> T {
    tokio::time::timeout(WAIT, sub.next())
        .await
        .expect("timed out waiting for next value")
        .expect("subscription closed")
}

/// Reads states until one matches `pred`, returning every state read.
pub async fn states_until(
    sub: &mut Subscription<ViewState>,
    pred: impl Fn(&ViewState) -> bool,
) -> Vec<ViewState> {
    let mut seen = Vec::new();
    loop {
        let state = next(sub).await;
        let done = pred(&state);
        seen.push(state);
        if done {
            return seen;
        }
    }
}

/// Polls `cond` until it holds, failing the test after a timeout.
pub async fn wait_until(cond: impl Fn() -> bool, what: &str) {
    let start = std::time::Instant::now();
    while !cond() {
        assert!(start.elapsed() < WAIT, "timed out waiting for {what}");
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
