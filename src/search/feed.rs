//! Hot broadcasts for the search screen.
//!
//! Both feeds fan out to one unbounded channel per subscriber, so a slow
//! subscriber never loses a value; it only falls behind.
//!
//! [`StateFeed`] keeps the latest published state and hands it to every new
//! subscriber before any live update. The cache update and the fan-out
//! happen under one lock, and so does subscription, so a subscriber never
//! misses or repeats a state between the replay and the live stream.
//! [`EffectBus`] has no cache: subscribers only see effects emitted after
//! they subscribed.

use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::mvi::{UiState, ViewEffect};

/// A subscriber's view of a feed.
pub struct Subscription<T> {
    replay: Option<T>,
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T> Subscription<T> {
    fn new(replay: Option<T>, rx: mpsc::UnboundedReceiver<T>) -> Self {
        Self { replay, rx }
    }

    /// Waits for the next value.
    ///
    /// Returns `None` once the feed is closed and drained.
    pub async fn next(&mut self) -> Option<T> {
        if let Some(value) = self.replay.take() {
            return Some(value);
        }
        self.rx.recv().await
    }

    /// Returns the next value if one is ready, without waiting.
    pub fn try_next(&mut self) -> Option<T> {
        if let Some(value) = self.replay.take() {
            return Some(value);
        }
        self.rx.try_recv().ok()
    }
}

/// Subscriber senders. `None` once the feed is closed.
struct Fanout<T> {
    subscribers: Option<Vec<mpsc::UnboundedSender<T>>>,
}

impl<T: Clone> Fanout<T> {
    fn new() -> Self {
        Self {
            subscribers: Some(Vec::new()),
        }
    }

    /// Sends `value` to every live subscriber, forgetting the ones that
    /// went away. Returns how many received it.
    fn send(&mut self, value: &T) -> usize {
        let Some(subscribers) = &mut self.subscribers else {
            return 0;
        };
        subscribers.retain(|tx| tx.send(value.clone()).is_ok());
        subscribers.len()
    }

    /// A new receiver, already ended if the feed is closed.
    fn receiver(&mut self) -> mpsc::UnboundedReceiver<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        if let Some(subscribers) = &mut self.subscribers {
            subscribers.push(tx);
        }
        rx
    }

    fn close(&mut self) {
        self.subscribers = None;
    }
}

struct FeedInner<S> {
    latest: S,
    fanout: Fanout<S>,
}

/// Latest-value cache plus live fan-out.
pub struct StateFeed<S> {
    inner: Mutex<FeedInner<S>>,
}

impl<S: UiState> StateFeed<S> {
    pub fn new(initial: S) -> Self {
        Self {
            inner: Mutex::new(FeedInner {
                latest: initial,
                fanout: Fanout::new(),
            }),
        }
    }

    /// Publishes `next` unless it equals the latest state.
    ///
    /// Returns whether the state was published.
    pub fn publish(&self, next: S) -> bool {
        let mut inner = self.inner.lock();
        if inner.latest == next {
            return false;
        }
        inner.fanout.send(&next);
        inner.latest = next;
        true
    }

    /// A copy of the latest published state.
    pub fn latest(&self) -> S {
        self.inner.lock().latest.clone()
    }

    /// Subscribes, receiving the latest state first.
    pub fn subscribe(&self) -> Subscription<S> {
        let mut inner = self.inner.lock();
        let rx = inner.fanout.receiver();
        Subscription::new(Some(inner.latest.clone()), rx)
    }

    /// Ends every subscription once it has drained. Later subscribers only
    /// get the replayed state.
    pub fn close(&self) {
        self.inner.lock().fanout.close();
    }
}

/// Non-replaying fan-out of view effects.
pub struct EffectBus<E> {
    fanout: Mutex<Fanout<E>>,
}

impl<E: ViewEffect> Default for EffectBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ViewEffect> EffectBus<E> {
    pub fn new() -> Self {
        Self {
            fanout: Mutex::new(Fanout::new()),
        }
    }

    /// Delivers `effect` to current subscribers. Returns how many got it.
    pub fn emit(&self, effect: E) -> usize {
        self.fanout.lock().send(&effect)
    }

    pub fn subscribe(&self) -> Subscription<E> {
        Subscription::new(None, self.fanout.lock().receiver())
    }

    pub fn close(&self) {
        self.fanout.lock().close();
    }
}
