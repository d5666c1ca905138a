//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (typing a title, tapping a history entry)
/// - Lifecycle events (the screen resuming)
///
/// Intents are routed to use-case handlers, never straight into reducers.
pub trait Intent: Send + 'static {}
