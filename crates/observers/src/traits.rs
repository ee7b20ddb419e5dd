//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasValue`] — events that carry a best-so-far value at a spend level
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use lapidary_core::Observer;
//! use lapidary_observers::traits::{CanStopEarly, HasValue};
//!
//! struct StopAtLevel(usize);
//!
//! impl<E: HasValue, A: CanStopEarly> Observer<E, A> for StopAtLevel {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.level() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use lapidary_solvers::knapsack;

/// An event that carries the best value found at a spend level.
pub trait HasValue {
    /// Returns the spend level this event reports.
    fn level(&self) -> usize;

    /// Returns the best value achievable at this level.
    fn value(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasValue for knapsack::Event<'_> {
    fn level(&self) -> usize {
        self.level
    }

    fn value(&self) -> f64 {
        self.value
    }
}

impl CanStopEarly for knapsack::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
