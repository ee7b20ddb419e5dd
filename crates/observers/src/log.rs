use lapidary_core::Observer;

use crate::traits::HasValue;

/// Reports solver progress through `tracing`.
///
/// Every `every`-th level is logged at `debug`, and any level whose value
/// improves on the previous one is logged at `trace`. The observer never asks
/// the solver to act.
///
/// No subscriber is installed; output goes wherever the application routes
/// `tracing` events.
#[derive(Debug, Clone)]
pub struct LogObserver {
    every: usize,
    observed: usize,
    last_value: Option<f64>,
}

impl LogObserver {
    /// Creates an observer that logs every level.
    #[must_use]
    pub fn new() -> Self {
        Self {
            every: 1,
            observed: 0,
            last_value: None,
        }
    }

    /// Logs only every `every`-th level at `debug`. Zero is treated as one.
    #[must_use]
    pub fn every(mut self, every: usize) -> Self {
        self.every = every.max(1);
        self
    }

    /// Returns the number of events seen so far.
    #[must_use]
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Returns the value from the most recent event.
    #[must_use]
    pub fn last_value(&self) -> Option<f64> {
        self.last_value
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: HasValue, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        let level = event.level();
        let value = event.value();

        if self.last_value.is_some_and(|last| value > last) {
            tracing::trace!(level, value, "value improved");
        }
        if self.observed % self.every == 0 {
            tracing::debug!(level, value, "spend level solved");
        }

        self.observed += 1;
        self.last_value = Some(value);
        None
    }
}
