//! Unbounded knapsack solver for budget-constrained portfolio selection.
//!
//! # Algorithm
//!
//! Given priced [`Item`]s and an integer budget, the solver finds a count of
//! units per item that maximizes total price subject to total cost not
//! exceeding the budget. Each item may be selected any number of times.
//!
//! The solver fills a table with one row per spend level `0..=budget`, in
//! ascending order. For each level it scans items in input order, and for each
//! item whose whole-unit cost fits it takes the recorded row at
//! `level - cost`, adds one unit of the item, and keeps the result if its value
//! is at least the best recorded so far at this level. Rows are read from the
//! current table, so a level can build on rows completed earlier in the same
//! pass.
//!
//! # Tie-breaking
//!
//! Candidates replace the recorded row on `>=`, so when several items reach
//! the same value at a level the last one in input order wins. Results are
//! deterministic for a given input order.
//!
//! # Zero-cost items
//!
//! An item whose cost truncates to zero and whose price is positive can be
//! added without limit. [`ZeroCost`] in the [`Config`] decides whether such
//! items are rejected (the default) or capped at a fixed number of units that
//! is included at every spend level. Zero-cost items with zero price are never
//! selected.
//!
//! # Complexity
//!
//! `O(budget × n)` time and space: every row stores a full count vector.
//! [`Config::max_cells`] bounds the table size up front.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per spend level once that level is final.
//! Observers can return [`Action::StopEarly`] to halt, in which case the
//! [`Solution`] covers levels up to and including the last one reported.
//!
//! [`Item`]: lapidary_core::Item

mod action;
mod budget;
mod config;
mod error;
mod event;
mod search;
mod solution;
mod table;


pub use action::Action;
pub use budget::{Budget, BudgetError};
pub use config::{Config, ConfigError, ZeroCost};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use table::Table;

use lapidary_core::{Item, Observer, OptimizationResult};

/// Solves the unbounded knapsack problem over `items` with the given budget.
///
/// The observer receives an [`Event`] for each spend level.
/// See the [module docs](self) for details on ordering and observer actions.
///
/// # Errors
///
/// Returns an error if the budget is negative, the table would exceed
/// [`Config::max_cells`], an unbounded zero-cost item is rejected, or a value
/// or count overflows.
pub fn solve<Obs>(
    items: &[Item],
    budget: i64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let budget = Budget::new(budget)?;
    search::search(items, budget, config, observer)
}

/// Solves the unbounded knapsack problem without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved(items: &[Item], budget: i64, config: &Config) -> Result<Solution, Error> {
    solve(items, budget, config, ())
}

/// Returns the best allocation and its value for the full budget.
///
/// Uses the default [`Config`] and no observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn optimize(items: &[Item], budget: i64) -> Result<OptimizationResult, Error> {
    solve_unobserved(items, budget, &Config::default()).map(Solution::into_result)
}
