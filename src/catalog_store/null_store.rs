//! Null singles store implementation.
//!
//! Relies entirely on the [`SinglesStore`] defaults, so every operation
//! reports `NotImplemented`. Useful to exercise the error path of callers.

use super::trait_def::SinglesStore;

/// A store that fulfils no operation.
pub struct NullSinglesStore;

impl SinglesStore for NullSinglesStore {}
