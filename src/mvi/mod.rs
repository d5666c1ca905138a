//! Model-View-Intent (MVI) primitives.
//!
//! Base traits for the unidirectional data flow used by feature modules.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Router ──→ Lce<Result> ──┬──→ Reducer ──→ State ──→ View
//!    ↑                                 └──→ Effect filter ──→ Effect
//!    └──────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of what the view should render
//! - **Intent**: User actions or system events
//! - **Reducer**: Pure function folding results into state
//! - **Effect**: One-shot signal that is not part of state

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::ViewEffect;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
