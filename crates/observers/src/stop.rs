use lapidary_core::Observer;

use crate::traits::{CanStopEarly, HasValue};

/// Stops a solver at the first level whose value reaches a target.
///
/// Because knapsack values never decrease with budget, the level a solve stops
/// at is the smallest budget that achieves the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopAtValue {
    target: f64,
}

impl StopAtValue {
    /// Creates an observer that stops once the value is at least `target`.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target }
    }
}

impl<E: HasValue, A: CanStopEarly> Observer<E, A> for StopAtValue {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.value() >= self.target).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lapidary_core::Item;
    use lapidary_solvers::knapsack::{self, Config, Status};

    #[test]
    fn finds_smallest_budget_for_target() {
        let items = vec![Item::new(10.0, 4.0).unwrap(), Item::new(14.0, 5.0).unwrap()];

        let solution = knapsack::solve(&items, 100, &Config::default(), StopAtValue::new(24.0))
            .expect("should solve");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.level(), 9);
        assert_eq!(solution.allocation().counts(), &[1, 1]);
    }

    #[test]
    fn unreachable_target_runs_to_completion() {
        let items = vec![Item::new(1.0, 1.0).unwrap()];

        let solution = knapsack::solve(&items, 5, &Config::default(), StopAtValue::new(50.0))
            .expect("should solve");

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.level(), 5);
    }
}
