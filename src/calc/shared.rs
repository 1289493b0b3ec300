//! A lock-guarded accumulator for use across threads.

use crate::calc::{Accumulator, Operation, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle to one accumulator shared between callers.
///
/// Each call holds the lock for the whole read-compute-write, so two
/// concurrent `chain` calls never observe the same starting register.
#[derive(Debug, Clone, Default)]
pub struct SharedAccumulator {
    inner: Arc<Mutex<Accumulator>>,
}

impl SharedAccumulator {
    /// Create a shared accumulator holding `0.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`Accumulator::apply`].
    pub fn apply(&self, op: Operation, a: f64, b: f64) -> Result<f64> {
        self.inner.lock().apply(op, a, b)
    }

    /// See [`Accumulator::chain`].
    pub fn chain(&self, op: Operation, b: f64) -> Result<f64> {
        self.inner.lock().chain(op, b)
    }

    /// See [`Accumulator::register`].
    pub fn register(&self) -> f64 {
        self.inner.lock().register()
    }

    /// Copy of the current accumulator state.
    pub fn snapshot(&self) -> Accumulator {
        *self.inner.lock()
    }
}

impl From<Accumulator> for SharedAccumulator {
    fn from(acc: Accumulator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(acc)),
        }
    }
}
