//! Unidirectional state core for a single-screen movie search.
//!
//! View events go in through [`search::MovieSearchVm::process_input`], are
//! routed to use-case handlers, and come out as a replaying stream of
//! [`search::ViewState`] plus a non-replaying stream of one-shot effects.

pub mod config;
pub mod lce;
pub mod logging;
pub mod lookup;
pub mod movie;
pub mod mvi;
pub mod search;
pub mod shutdown;
