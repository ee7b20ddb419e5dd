use lapidary_core::{Allocation, OptimizationResult};

use super::Table;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every spend level up to the budget was computed.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a knapsack solve.
///
/// Answers refer to the last computed level, which is the budget when the
/// status is [`Status::Complete`].
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Values and allocations for every computed spend level.
    pub table: Table,
}

impl Solution {
    /// Returns the last computed spend level.
    #[must_use]
    pub fn level(&self) -> usize {
        self.table.levels().saturating_sub(1)
    }

    /// Returns the best value at the last computed level.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.table.value(self.level()).unwrap_or(0.0)
    }

    /// Returns the allocation at the last computed level.
    #[must_use]
    pub fn allocation(&self) -> Allocation {
        self.table
            .allocation(self.level())
            .map_or_else(|| Allocation::zeros(self.table.item_count()), Allocation::from)
    }

    /// Converts the solution into the allocation and value at the last level.
    #[must_use]
    pub fn into_result(self) -> OptimizationResult {
        OptimizationResult {
            allocation: self.allocation(),
            total_value: self.value(),
        }
    }
}
