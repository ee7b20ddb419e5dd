use thiserror::Error;

use super::BudgetError;

/// Errors that can occur during knapsack solving.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid budget: {0}")]
    InvalidBudget(#[from] BudgetError),

    #[error("item {index} has zero cost and a positive price")]
    UnboundedItem { index: usize },

    #[error("table needs {cells} cells, more than the limit of {limit}")]
    TableTooLarge { cells: usize, limit: usize },

    #[error("value overflow at spend level {level}")]
    Overflow { level: usize },
}
