//! Reducer trait for MVI architecture.

use super::state::UiState;

/// Reducer folds inputs into state.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Input) -> State. Inputs that the
/// state machine has no valid transition for are reported as errors
/// instead of being absorbed.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The input type this reducer folds.
    type Input;

    /// Contract violation raised for inputs with no valid transition.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Process an input and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, input: Self::Input) -> Result<Self::State, Self::Error>;
}
