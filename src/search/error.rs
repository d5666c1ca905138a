//! Contract violations that stop the search pipeline.
//!
//! Ordinary search failures never show up here: they are folded into the
//! view state. These errors mean some component broke the pipeline's
//! contract and the pipeline cannot keep running safely.

use thiserror::Error;

use crate::lce::LceViolation;

/// Results the reducer has no valid transition for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReduceError {
    /// Only search results may arrive in the error state.
    #[error("unexpected {kind} result in the error state")]
    UnexpectedErrorResult { kind: &'static str },

    /// A search reached the error state without a message to show.
    #[error("search error reached the reducer without an error message")]
    MissingErrorMessage,
}

/// Fatal pipeline faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("reducer fault: {0}")]
    Reduce(#[from] ReduceError),

    #[error("search lifecycle fault: {0}")]
    Lifecycle(#[from] LceViolation),
}
