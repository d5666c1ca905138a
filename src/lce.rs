//! Loading / Content / Error envelope for asynchronous outcomes.
//!
//! Every result reaching the reducer travels inside an [`Lce`]. An
//! asynchronous operation emits `Loading` first and then exactly one
//! terminal value; a synchronous one emits a single terminal value.
//!
//! ```text
//!   (start) ──→ Loading ──→ Content(T)
//!      │                └──→ Error(T)
//!      └──→ Content(T)          (synchronous use-cases)
//! ```

use thiserror::Error;

/// Tagged wrapper around the outcome of one use-case emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lce<T> {
    /// The operation has started and has not produced a value yet.
    Loading,
    /// The operation succeeded.
    Content(T),
    /// The operation failed. The packet still carries the domain result,
    /// which holds the failure description.
    Error(T),
}

impl<T> Lce<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Lce::Loading)
    }

    /// True for `Content` and `Error`.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    /// The wrapped packet, if this is a terminal emission.
    pub fn packet(&self) -> Option<&T> {
        match self {
            Lce::Loading => None,
            Lce::Content(packet) | Lce::Error(packet) => Some(packet),
        }
    }

    /// Maps the packet while keeping the envelope shape.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lce<U> {
        match self {
            Lce::Loading => Lce::Loading,
            Lce::Content(packet) => Lce::Content(f(packet)),
            Lce::Error(packet) => Lce::Error(f(packet)),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Lce::Loading => "loading",
            Lce::Content(_) => "content",
            Lce::Error(_) => "error",
        }
    }
}

/// An emission that breaks the `Loading → (Content | Error)` lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LceViolation {
    #[error("operation emitted loading twice")]
    DuplicateLoading,

    #[error("operation emitted {next} after it already settled with {settled}")]
    TerminalAfterTerminal {
        settled: &'static str,
        next: &'static str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Loading,
    Settled(&'static str),
}

/// Validates the lifecycle of a single logical operation.
///
/// Create one tracker per operation and feed it every emission of that
/// operation, in order.
#[derive(Debug, Clone)]
pub struct LceTracker {
    phase: Phase,
}

impl Default for LceTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl LceTracker {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Records `lce` and rejects it if the operation cannot emit it now.
    pub fn observe<T>(&mut self, lce: &Lce<T>) -> Result<(), LceViolation> {
        self.phase = match (self.phase, lce) {
            (Phase::Idle, Lce::Loading) => Phase::Loading,
            (Phase::Loading, Lce::Loading) => return Err(LceViolation::DuplicateLoading),
            (Phase::Idle | Phase::Loading, terminal) => Phase::Settled(terminal.kind()),
            (Phase::Settled(settled), next) => {
                return Err(LceViolation::TerminalAfterTerminal {
                    settled,
                    next: next.kind(),
                })
            }
        };
        Ok(())
    }

    /// True once a terminal emission has been observed.
    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Settled(_))
    }
}
