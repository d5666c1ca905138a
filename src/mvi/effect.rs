//! Base trait for one-shot view effects.

/// Marker trait for view effects.
///
/// Effects are fire-once signals (toasts, haptics). They are delivered to
/// whoever is subscribed at the time and are never replayed.
pub trait ViewEffect: Clone + std::fmt::Debug + Send + 'static {}
